use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[ctor::ctor]
fn init_tests() {
    // one subscriber for the whole test binary, filtered by RUST_LOG
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Grammar used by the integration tests: one rule per line.
pub const GRAMMAR: &str = r#"letter = "A" | "B" | "C" ;
digit = "0" | "1" ;
identifier = letter , { letter | digit } ;
number = [ "-" ] , digit , { digit } ;
term = ( identifier | number ) - "X" ;
special = ? any character ? ;"#;
