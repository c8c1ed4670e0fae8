use env_logger::Env;
use request_invoker::output::write_body;
use request_invoker::{invoke, InvokerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    // The request is fixed at build time; nothing is read from the environment
    let request = InvokerConfig::default().request()?;

    // Any transport failure ends the run here, nothing is retried
    let text = invoke(&request).await?;

    let mut stdout = std::io::stdout().lock();
    write_body(&mut stdout, &text)?;

    Ok(())
}
