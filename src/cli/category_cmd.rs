use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum CategoryCmd {
    #[command(about = "Print the last selected category filter")]
    Get,
    #[command(about = "Remember a category filter (use 'all' for no filter)")]
    Set {
        #[arg(value_name = "CATEGORY")]
        value: String,
    },
}
