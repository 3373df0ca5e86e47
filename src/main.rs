use clap::Parser;
use notaires_utils::config::{CliConfig, Command};
use notaires_utils::core::{lettres, otp, reference};
use notaires_utils::utils::logger;
use notaires_utils::utils::phone::normalize_phone;
use notaires_utils::utils::validation::{validate_range, Validate};
use notaires_utils::{AqilasClient, SmsConfig, SmsGateway};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli.command).await {
        tracing::error!("❌ Command failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command) -> notaires_utils::Result<()> {
    match command {
        Command::Lettres { montant } => {
            println!("{}", lettres::montant_en_lettres(montant)?);
        }
        Command::Otp { length } => {
            validate_range("length", length, 4, 10)?;
            println!("{}", otp::generate_otp(length));
        }
        Command::Phone { numero } => {
            println!("{}", normalize_phone(&numero)?);
        }
        Command::Reference { prefix } => {
            println!("{}", reference::generate_reference(&prefix));
        }
        Command::Sms {
            phone,
            code,
            config,
        } => {
            let sms_config = match config {
                Some(path) => SmsConfig::load(path)?,
                None => SmsConfig::from_env(),
            };
            sms_config.validate()?;

            let phone = normalize_phone(&phone)?;
            let code = code.unwrap_or_else(|| otp::generate_otp(6));

            let client = AqilasClient::new(sms_config)?;
            let report = client.send_otp(&phone, &code).await?;

            tracing::info!("✅ SMS envoyé à {} (status {})", phone, report.status);
            println!("✅ SMS envoyé à {} (status {})", phone, report.status);
            if let Some(cost) = report.cost {
                println!(
                    "💰 Coût: {} {}",
                    cost,
                    report.currency.as_deref().unwrap_or("XOF")
                );
            }
        }
    }
    Ok(())
}
