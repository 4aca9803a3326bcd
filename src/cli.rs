// CLI commands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::{decode_string, encode_string, format_sui, sui_to_mist, uleb128_len, TransactionDigest};
use crate::network::{Config, Network};
use crate::tx::CallPlan;

#[derive(Parser)]
#[command(name = "move-args")]
#[command(about = "Build Move call arguments and call plans for Sui", long_about = None)]
pub struct Cli {
    /// Deployment config file
    #[arg(long, global = true, default_value = "move-args.json")]
    pub config: PathBuf,

    /// Network override (devnet, testnet, mainnet, localnet)
    #[arg(long, global = true, env = "MOVE_ARGS_NETWORK")]
    pub network: Option<Network>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default config file
    Init,

    /// Show the active network
    Network,

    /// Encode text as a pure String argument (hex)
    Encode {
        text: String,
    },

    /// Decode a hex String argument
    Decode {
        hex: String,
    },

    /// Greeting contract calls
    #[command(subcommand)]
    Greeting(GreetingCommands),

    /// NFT contract calls
    #[command(subcommand)]
    Nft(NftCommands),

    /// Lending pool calls
    #[command(subcommand)]
    Defi(DefiCommands),

    /// Explorer link for a transaction digest
    Explorer {
        digest: String,
    },
}

#[derive(Subcommand)]
pub enum GreetingCommands {
    /// Create a new shared greeting
    New,

    /// Update the greeting text
    Update {
        text: String,
    },
}

#[derive(Subcommand)]
pub enum NftCommands {
    /// Mint an NFT to the sender
    Mint {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        image_url: String,
    },

    /// Print the struct type used to list owned NFTs
    Type,
}

#[derive(Subcommand)]
pub enum DefiCommands {
    /// Deposit SUI into the pool
    Deposit {
        /// Amount in SUI
        amount: String,
    },

    /// Borrow SUI from the pool
    Borrow {
        /// Amount in SUI
        amount: String,
    },

    /// Repay borrowed SUI
    Repay {
        /// Amount in SUI
        amount: String,
    },
}

/// CLI handler
pub struct CliHandler {
    config: Config,
    config_path: PathBuf,
}

impl CliHandler {
    /// Load the config, applying the network override if given
    pub fn new(config_path: PathBuf, network: Option<Network>) -> Result<Self, String> {
        let mut config = Config::load(&config_path)?;
        if let Some(network) = network {
            log::info!("Network overridden to {}", network);
            config.network = network;
        }

        Ok(Self { config, config_path })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle CLI command
    pub fn handle(&self, cli: Cli) -> Result<(), String> {
        match cli.command {
            Commands::Init => self.init(),
            Commands::Network => self.network(),
            Commands::Encode { text } => self.encode(&text),
            Commands::Decode { hex } => self.decode(&hex),
            Commands::Greeting(cmd) => self.print_plan(self.greeting_plan(cmd)?),
            Commands::Nft(cmd) => self.handle_nft(cmd),
            Commands::Defi(cmd) => self.print_plan(self.defi_plan(cmd)?),
            Commands::Explorer { digest } => self.explorer(&digest),
        }
    }

    fn init(&self) -> Result<(), String> {
        self.config.save(&self.config_path)?;
        println!("✓ Config written to {}", self.config_path.display());
        Ok(())
    }

    fn network(&self) -> Result<(), String> {
        let network = self.config.network;
        println!("Network: {}", network);
        println!("  Full node: {}", network.fullnode_url());
        if let Some(explorer) = network.explorer_url() {
            println!("  Explorer: {}", explorer);
        }
        Ok(())
    }

    fn encode(&self, text: &str) -> Result<(), String> {
        let bytes = encode_string(text).map_err(|e| e.to_string())?;
        let prefix = uleb128_len(text.len() as u32);

        println!("{}", hex::encode(&bytes));
        log::info!(
            "{} payload bytes, {} byte length prefix {}",
            text.len(),
            prefix,
            hex::encode(&bytes[..prefix])
        );
        Ok(())
    }

    fn decode(&self, hex_str: &str) -> Result<(), String> {
        let digits = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(digits).map_err(|e| format!("Invalid hex: {}", e))?;
        let text = decode_string(&bytes).map_err(|e| e.to_string())?;
        println!("{}", text);
        Ok(())
    }

    /// Build the plan for a greeting command
    pub fn greeting_plan(&self, cmd: GreetingCommands) -> Result<CallPlan, String> {
        let greeting = self.config.greeting();
        let plan = match cmd {
            GreetingCommands::New => greeting.new_greeting(),
            GreetingCommands::Update { text } => greeting.update_text(&text),
        };
        plan.map_err(|e| e.to_string())
    }

    fn handle_nft(&self, cmd: NftCommands) -> Result<(), String> {
        match cmd {
            NftCommands::Mint { name, description, image_url } => {
                let plan = self
                    .config
                    .nft()
                    .mint_to_sender(&name, &description, &image_url)
                    .map_err(|e| e.to_string())?;
                self.print_plan(plan)
            }
            NftCommands::Type => {
                println!("{}", self.config.nft().struct_type());
                Ok(())
            }
        }
    }

    /// Build the plan for a lending pool command
    pub fn defi_plan(&self, cmd: DefiCommands) -> Result<CallPlan, String> {
        let pool = self.config.lending_pool();
        let plan = match cmd {
            DefiCommands::Deposit { amount } => {
                let mist = sui_to_mist(&amount)?;
                log::info!("Depositing {} SUI ({} MIST)", format_sui(mist), mist);
                pool.deposit(mist)
            }
            DefiCommands::Borrow { amount } => {
                let mist = sui_to_mist(&amount)?;
                log::info!("Borrowing {} SUI ({} MIST)", format_sui(mist), mist);
                pool.borrow(mist)
            }
            DefiCommands::Repay { amount } => {
                let mist = sui_to_mist(&amount)?;
                log::info!("Repaying {} SUI ({} MIST)", format_sui(mist), mist);
                pool.repay(mist)
            }
        };
        plan.map_err(|e| e.to_string())
    }

    fn explorer(&self, digest: &str) -> Result<(), String> {
        let digest = TransactionDigest::from_base58(digest)?;
        let url = self
            .config
            .network
            .explorer_tx_url(&digest)
            .ok_or_else(|| format!("No public explorer for {}", self.config.network))?;
        println!("{}", url);
        Ok(())
    }

    fn print_plan(&self, plan: CallPlan) -> Result<(), String> {
        let json = plan.to_json().map_err(|e| e.to_string())?;
        println!("{}", json);
        Ok(())
    }
}
