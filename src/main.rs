use chrono::Local;
use clap::Parser;
use exam_shop::core::slideshow::Slideshow;
use exam_shop::utils::logger;
use exam_shop::{AddOutcome, CliConfig, RestExamSource, Storefront, StorefrontEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting exam-shop CLI");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    let settings = match args.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let source = RestExamSource::new(settings.clone());
    let engine = StorefrontEngine::new(source);

    // The only clock read in the program; everything below takes the day
    // as a parameter.
    let today = Local::now().date_naive();

    // Fetch failure is not fatal: fall back to an empty catalogue and tell
    // the user, the way the storefront shows its failure notice.
    let mut store = match engine.open().await {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!("Failed to load exams: {}", e);
            eprintln!("⚠️  Failed to load exams ({}). Showing an empty catalogue.", e);
            Storefront::new(Vec::new())
        }
    };

    store.set_search_query(args.query.clone());
    store.set_filter_mode(args.date_mode());
    store.set_selected_date(args.date);

    println!("🏪 {}", settings.storefront_name);

    let highlights = store.todays_exams(today);
    let slideshow = Slideshow::new(highlights.len());
    match slideshow.current() {
        Some(index) => {
            let exam = &highlights[index];
            println!(
                "🎓 Today's examination: {} ({}) • Session {} • {} {}",
                exam.subject, exam.paper_code, exam.session, exam.exam_time, exam.duration
            );
        }
        None => println!("🎓 No exams scheduled for today."),
    }

    let filtered = store.filtered_exams(today);
    if filtered.is_empty() {
        println!("No exams match the current filters.");
    } else {
        println!("📚 {} exam(s) found:", filtered.len());
        for exam in &filtered {
            println!(
                "  {:<12} {:<24} {:<8} {}  {} {:.2}",
                exam.id,
                exam.subject,
                exam.paper_code,
                exam.exam_date,
                settings.currency,
                exam.price
            );
        }
    }

    for id in &args.add {
        match store.add_to_cart_by_id(id) {
            Some(AddOutcome::Added) => println!("✅ Added {} to cart", id),
            Some(AddOutcome::AlreadyInCart) => println!("ℹ️  {} is already in the cart", id),
            None => println!("⚠️  No exam with id {}", id),
        }
    }

    if !store.cart_items().is_empty() {
        println!("🛒 Cart ({} item(s)):", store.cart_count());
        for item in store.cart_items() {
            println!(
                "  {:<12} {:<24} {} {:.2}",
                item.id, item.subject, settings.currency, item.price
            );
        }
        println!(
            "💰 Total: {} {:.2}",
            settings.currency,
            store.cart_total()
        );
    }

    Ok(())
}
