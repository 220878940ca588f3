use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, registry, util::SubscriberInitExt, EnvFilter,
};

use hh_vacancies::{
    collect_vacancies, consts::DEFAULT_LOG_FILTERS, opts::Opts, write_results, HhClient,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let mut filter = EnvFilter::builder()
        .with_default_directive(opts.log.into())
        .with_env_var("LOG")
        .from_env_lossy();

    for rule in DEFAULT_LOG_FILTERS {
        filter = filter.add_directive(rule.parse().expect("DEFAULT_LOG_FILTERS misconfiguration"));
    }
    registry().with(filter).with(layer()).init();

    let collected = {
        let mut client = HhClient::new(opts.client_config()).context("building HTTP client")?;
        collect_vacancies(&mut client, &opts.query())
            .await
            .context("collecting vacancies")?
    };

    write_results(&collected.items, &opts.output, opts.format)
        .with_context(|| format!("writing {}", opts.output.display()))?;
    info!(
        found = ?collected.found,
        written = collected.items.len(),
        output = %opts.output.display(),
        "done"
    );

    Ok(())
}
