use clap::{Arg, Command};
use seq2seq_sim::engine::{Phase, SimConfig, Simulation};
use seq2seq_sim::gateway::{GeminiProvider, MockGateway, MockMode, TranslationGateway};
use seq2seq_sim::language::Language;
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let matches = Command::new("seq2seq-sim")
        .version("0.1.0")
        .about("Terminal playback of an encoder-decoder translation simulation")
        .arg(
            Arg::new("text")
                .help("Sentence to translate and animate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target")
                .help("Target language code (en, hi, mr)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Source language code (default: en)")
                .default_value("en"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock gateway instead of the Gemini API")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("speed")
                .long("speed")
                .help("Animation speed in milliseconds (clamped to 200..2000)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print every snapshot change, including vectors")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let target = matches.get_one::<String>("target").unwrap();
    let source = matches.get_one::<String>("source").unwrap();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let from = Language::from_code(source)
        .ok_or_else(|| format!("Unsupported source language: {}", source))?;
    let to = Language::from_code(target)
        .ok_or_else(|| format!("Unsupported target language: {}", target))?;

    let config = SimConfig::default();
    let (gateway, credential): (Arc<dyn TranslationGateway>, Option<String>) = if use_mock {
        (
            Arc::new(MockGateway::with_delay(
                MockMode::Reverse,
                Duration::from_millis(300),
            )),
            Some("mock".to_string()),
        )
    } else {
        if env::var("GEMINI_API_KEY").is_err() {
            eprintln!("GEMINI_API_KEY environment variable not set");
            eprintln!("   Set it with: export GEMINI_API_KEY=your_api_key");
            eprintln!("   Or use --mock to run without a key");
            return Err("Missing API key".into());
        }
        (
            Arc::new(GeminiProvider::new(config.request_timeout)?),
            env::var("GEMINI_API_KEY").ok(),
        )
    };

    let sim = Simulation::new(gateway, credential, config);
    if let Some(speed) = matches.get_one::<u64>("speed") {
        sim.set_speed(*speed);
    }

    println!("{} → {}: \"{}\"", from, to, text);
    let translated = match sim.start_translation(text, from, to).await {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Translation failed: {}", e);
            return Err(e.into());
        }
    };
    sim.toggle_pause();

    // Print one line per phase/step change until the run finishes.
    let mut last = (Phase::Translating, usize::MAX);
    loop {
        let snap = sim.snapshot();
        if (snap.phase, snap.step) != last {
            last = (snap.phase, snap.step);
            match snap.phase {
                Phase::Encoding => {
                    let token = &snap.input_tokens[snap.step];
                    print!(
                        "Encoding {}/{}: {}",
                        snap.step + 1,
                        snap.input_tokens.len(),
                        token
                    );
                    if verbose {
                        print!("  {:?}", snap.input_vectors[snap.step]);
                    }
                    println!();
                }
                Phase::Context => {
                    print!("Generating context vector");
                    if verbose {
                        print!("  {:?}", snap.context_vector);
                    }
                    println!();
                }
                Phase::Decoding => {
                    let token = &snap.output_tokens[snap.step];
                    print!(
                        "Decoding {}/{}: {}",
                        snap.step + 1,
                        snap.output_tokens.len(),
                        token
                    );
                    if verbose {
                        print!("  {:?}", snap.output_vectors[snap.step]);
                    }
                    println!();
                }
                Phase::Done => break,
                Phase::Idle | Phase::Translating => {}
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    println!("Translation: {}", translated);
    Ok(())
}
