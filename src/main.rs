use yt_pubsub::{config::Config, routes::App};

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    dioxus_logger::init(config.log_level)?;
    tracing::info!(backend = %config.backend_base, "starting PubSubHubbub form");

    dioxus::launch(App);

    Ok(())
}
