use campus_lostfound::item::{ImageAttachment, ItemDraft, ItemKind};
use campus_lostfound::posting::PostingService;
use campus_lostfound::search::{Listing, Query};
use campus_lostfound::store::{FileBackend, ItemStore};
use campus_lostfound::user_config::UserConfig;
use color_eyre::eyre::{Result, WrapErr};
use std::io::Write;
use tracing::{debug, info};

use super::render::{render_categories, render_listing};
use super::{Commands, ListArgs, PostArgs};

/// Run one subcommand, writing user-facing output to `out`.
pub async fn run<W: Write>(command: Commands, config: &UserConfig, out: &mut W) -> Result<()> {
    match command {
        Commands::Post(args) => post(args, config, out).await,
        Commands::Lost(args) => list(ItemKind::Lost, &args, config, out),
        Commands::Found(args) => list(ItemKind::Found, &args, config, out),
        Commands::Categories => {
            out.write_all(render_categories().as_bytes())?;
            Ok(())
        }
    }
}

fn open_store(config: &UserConfig) -> ItemStore<FileBackend> {
    let dir = config.storage.resolved_data_dir();
    debug!("Opening store in {}", dir.display());
    let backend = FileBackend::new(dir).with_quota(config.storage.quota_bytes);
    ItemStore::open(backend, config.storage.key.clone())
}

async fn post<W: Write>(args: PostArgs, config: &UserConfig, out: &mut W) -> Result<()> {
    let rules = config.posting.admission_rules();
    let image = match &args.image {
        Some(path) => Some(
            ImageAttachment::read(path, rules.max_image_bytes)
                .wrap_err_with(|| format!("Could not attach {}", path.display()))?,
        ),
        None => None,
    };

    let draft = ItemDraft {
        kind: args.kind,
        title: args.title,
        category: args.category,
        description: args.description,
        location: args.location,
        contact_email: args.email,
        contact_phone: args.phone.unwrap_or_default(),
        image,
    };

    let service = PostingService::new(rules)
        .with_submit_delay(config.posting.submit_delay());
    let mut store = open_store(config);
    let item = service.submit(&mut store, &draft).await?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&item)?)?;
    } else {
        writeln!(
            out,
            "Posted {} item '{}' ({})",
            item.kind, item.title, item.id
        )?;
    }
    Ok(())
}

fn list<W: Write>(kind: ItemKind, args: &ListArgs, config: &UserConfig, out: &mut W) -> Result<()> {
    let store = open_store(config);
    let query = Query::new()
        .with_term(args.search.clone())
        .with_category(args.category)
        .with_sort(args.sort);
    let partition = store.partition(kind);
    let listing = Listing::build(kind, &partition, &query);
    info!(
        "Listing {kind} items: {} of {} (sort {}, category {})",
        listing.shown(),
        listing.total,
        query.sort,
        query.category
    );

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&listing.items)?)?;
    } else {
        out.write_all(render_listing(&listing).as_bytes())?;
    }
    Ok(())
}
