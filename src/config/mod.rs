pub mod sms;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "notaires-utils")]
#[command(about = "Utilitaires du backend notaires: montants en lettres, OTP, téléphone, SMS")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convertit un montant FCFA en toutes lettres
    Lettres { montant: i64 },

    /// Génère un code OTP numérique
    Otp {
        #[arg(long, default_value = "6")]
        length: usize,
    },

    /// Normalise un numéro de téléphone burkinabè
    Phone { numero: String },

    /// Génère une référence de demande (PREFIX-AAAAMMJJ-NNNN)
    Reference {
        #[arg(long, default_value = "DEM")]
        prefix: String,
    },

    /// Envoie un SMS OTP de test via la passerelle Aqilas
    Sms {
        #[arg(long)]
        phone: String,

        #[arg(long, help = "Code à envoyer (généré si absent)")]
        code: Option<String>,

        #[arg(long, help = "Fichier TOML (sinon variables AQILAS_*)")]
        config: Option<String>,
    },
}
