use clap::Parser;
use slimdoc::config::cli::{load_document, write_output};
use slimdoc::utils::{logger, validation::Validate};
use slimdoc::{CliConfig, MinimizeOptions, Minimized, PathSpec, PlanConfig, Projector, SlimError};

fn run(config: &CliConfig) -> Result<(), SlimError> {
    let (mut specs, mut options) = match &config.plan {
        Some(plan_path) => {
            let plan = PlanConfig::from_file(plan_path)?;
            plan.validate()?;
            tracing::info!("📋 Using plan '{}'", plan.plan.name);
            (plan.plan.specs, plan.options)
        }
        None => (Vec::new(), MinimizeOptions::default()),
    };

    specs.extend(config.fields.iter().map(|field| PathSpec::field(field.as_str())));
    if config.strict {
        options.strict_nested_paths = true;
    }

    let document = load_document(&config.document)?;
    tracing::debug!("Loaded document with {} field(s)", document.len());

    let projector = Projector::new(options);
    let output = match projector.minimize(&document, &specs)? {
        Minimized::Projection(projection) => projection.into_value(),
        Minimized::Original(original) => {
            tracing::info!("Nothing projected, emitting the original document");
            serde_json::Value::Object(original.clone())
        }
    };

    let mut rendered = if config.pretty {
        serde_json::to_vec_pretty(&output)?
    } else {
        serde_json::to_vec(&output)?
    };
    rendered.push(b'\n');

    match &config.output {
        Some(path) => {
            write_output(path, &rendered)?;
            tracing::info!("📁 Output saved to: {}", path);
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&rendered)?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ Projection failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}
