use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List all accounts (admins only)
    List,
    /// Create a secretary account
    CreateSecretary {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Delete a secretary account
    Deactivate {
        /// User ID (UUID)
        id: String,
    },
}
