//! Interop Binding Compiler CLI

use interop_codegen::CancellationToken;
use interopc::{describe_signature, generate, init_tracing, EncodeOptions, GenerateOptions};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "generate" => {
            let summary = GenerateOptions::parse(&args[2..])
                .and_then(|options| generate(&options, &CancellationToken::new()));
            match summary {
                Ok(summary) => {
                    for error in &summary.errors {
                        eprintln!("error: {error}");
                    }
                    println!("wrote {} file(s)", summary.written.len());
                    if !summary.is_success() {
                        eprintln!("{} struct(s) skipped", summary.errors.len());
                        std::process::exit(1);
                    }
                }
                Err(e) => fail(&e),
            }
        }
        "encode" => {
            let description =
                EncodeOptions::parse(&args[2..]).and_then(|options| describe_signature(&options));
            match description {
                Ok(description) => print!("{description}"),
                Err(e) => fail(&e),
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("interopc {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn fail(error: &interopc::DriverError) -> ! {
    eprintln!("error: {error}");
    if matches!(error, interopc::DriverError::Usage(_)) {
        eprintln!();
        print_usage();
    }
    std::process::exit(1);
}

fn print_usage() {
    println!("Interop binding compiler");
    println!();
    println!("Usage: interopc <command> [options]");
    println!();
    println!("Commands:");
    println!("  generate <structs.json> [options]   Generate bindings for a descriptor document");
    println!("  encode <pattern> [--reloc N]...     Show the packed form of a signature");
    println!("  help                                Show this help message");
    println!("  version                             Show version information");
    println!();
    println!("Generate options:");
    println!("  -o, --output <dir>                  Output directory (default: .)");
    println!("  --config <file>                     Configuration document (JSON)");
    println!("  --pointer-size <4|8>                Target pointer width in bytes");
    println!("  --runtime-namespace <ns>            Namespace of the runtime resolver");
    println!("  --generated-namespace <ns>          Namespace of batch-level artifacts");
    println!("  --no-parallel                       Compile structs on one thread");
    println!();
    println!("Set RUST_LOG=interop_codegen=debug for diagnostic output.");
}
