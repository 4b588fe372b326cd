use argh::FromArgs;
use color_eyre::Report;
use daily_deals::collection::{DealsScraper, HttpCollection};
use daily_deals::configuration::get_configuration;
use daily_deals::presentation::{summary, Columns};
use daily_deals::telemetry::init_telemetry;
use tracing::info;

#[derive(FromArgs)]
/// Today's deals, one per line.
struct AppParams {
    /// print the product id
    #[argh(switch)]
    id: bool,

    /// print the product title
    #[argh(switch)]
    title: bool,

    /// print the seller
    #[argh(switch)]
    seller: bool,

    /// print the original price
    #[argh(switch)]
    price: bool,

    /// print the sale price
    #[argh(switch)]
    saleprice: bool,

    /// print the product link
    #[argh(switch)]
    url: bool,

    /// print when the deals were updated and when they expire
    #[argh(switch)]
    summary: bool,
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    color_eyre::install()?;

    // Argument parsing
    let up: AppParams = argh::from_env();

    // Read configuration
    let configuration = get_configuration()?;
    // Setup telemetry
    init_telemetry(&configuration.telemetry.log_level);

    let source = HttpCollection::new(&configuration.collection)?;
    info!("Scraping {}", source.base_url());
    let scraper = DealsScraper::new(source, configuration.collection.max_pages);

    let daily_deals = scraper.daily_deals().await?;

    if up.summary {
        println!("{}", summary(&daily_deals));
    }

    let columns = Columns {
        id: up.id,
        title: up.title,
        seller: up.seller,
        price: up.price,
        sale_price: up.saleprice,
        url: up.url,
    };
    for deal in &daily_deals {
        println!("{}", columns.render(deal, scraper.source().base_url()));
    }

    Ok(())
}
