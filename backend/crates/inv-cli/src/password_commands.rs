use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum PasswordCommands {
    /// Change the signed-in user's password
    Change {
        /// Current password
        #[arg(long)]
        old: String,
        /// New password
        #[arg(long)]
        new: String,
    },
}
