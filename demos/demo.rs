use dragon_env::{bindings, Dialect, Duration, Loader};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct AppEnv {
    name: String,
    port: i32,
    debug: bool,
    timeout: Duration,
    database_url: Option<String>,
}

bindings! {
    AppEnv {
        name => "APP_NAME" = "demo",
        port => "APP_PORT" = "8080",
        debug => "APP_DEBUG",
        timeout => "APP_TIMEOUT" = "30s",
        database_url => "DATABASE_URL",
    }
}

const DOTENV: &str = r#"
# defaults shipped with the demo
APP_NAME="dragon demo"
APP_PORT = 3000
APP_TIMEOUT=1m30s # inline comments are ignored
"#;

fn main() -> Result<(), dragon_env::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // built-in text -> optional .env in the working directory -> process environment
    let env: AppEnv = Loader::builder()
        .with_dotenv_str(DOTENV, Dialect::NodeJs)
        .with_dotenv_file(".env", Dialect::NodeJs, false)
        .with_os_env()
        .build()?;

    println!("{} listening on port {} (debug={})", env.name, env.port, env.debug);
    println!("timeout: {}", env.timeout);
    match &env.database_url {
        Some(url) => println!("database: {}", url),
        None => println!("database: not configured"),
    }

    Ok(())
}
