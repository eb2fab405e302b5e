// morph: decode a GNT or WLC source tree and persist the word records.
//
// Usage:
//   morph --mode gnt|wlc [--style english|hebrew] [--sink jsonl|print]
//         [--output DIR] [--flat]
//
// Environment:
//   SOURCE       source directory (default ./morphgnt/ or ./morphhb/)
//   TABLE_NAME   table name given to the sink (default morphgnt or morphwlc)
//   VERBOSE      true for debug logging

use morph_decode::MorphEngine;
use morph_sink::RetryPolicy;
use tracing::{error, info};

fn print_help() {
    println!("morph: Decode biblical morphology codes into word records.");
    println!();
    println!("Usage: morph --mode gnt|wlc [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -m, --mode MODE      Corpus to convert: gnt or wlc");
    println!("  -s, --style STYLE    WLC versification: hebrew (default) or english");
    println!("      --sink SINK      Output backend: jsonl (default) or print");
    println!("  -o, --output DIR     Root directory for jsonl output (default ./output)");
    println!("      --flat           Print flattened morphology instead of JSON");
    println!("  -h, --help           Print this help");
    println!();
    println!("Environment:");
    println!("  SOURCE       Source directory (default ./morphgnt/ or ./morphhb/)");
    println!("  TABLE_NAME   Table name given to the sink (default morphgnt or morphwlc)");
    println!("  VERBOSE      Set to true for debug logging");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if morph_cli::wants_help(&args) {
        print_help();
        return;
    }

    let config = morph_cli::Config::from_args(&args, |k| std::env::var(k).ok())
        .unwrap_or_else(|e| morph_cli::fatal(&e));
    morph_cli::init_logging(config.verbose);

    let engine = MorphEngine::new().unwrap_or_else(|e| morph_cli::fatal(&e.to_string()));
    let sources = morph_cli::scan_sources(&config).unwrap_or_else(|e| morph_cli::fatal(&e));
    info!(
        mode = ?config.mode,
        dir = %config.source_dir().display(),
        books = sources.len(),
        table = %config.table,
        "converting"
    );

    let mut sink = config.build_sink();
    match morph_cli::run(&engine, sources, sink.as_mut(), &RetryPolicy::default()) {
        Ok(summary) if summary.failed.is_empty() => {}
        Ok(summary) => {
            error!(failed = ?summary.failed, "some books were skipped");
            std::process::exit(2);
        }
        Err(e) => morph_cli::fatal(&e.to_string()),
    }
}
