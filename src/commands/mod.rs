use crate::app::App;
use crate::cli::Command;

mod category;
mod quotes;
mod sync;

pub(crate) trait CommandRunner {
    async fn run(&self, app: &App) -> anyhow::Result<()>;
}

impl Command {
    pub async fn run(&self, app: &App) -> anyhow::Result<()> {
        match self {
            Command::Add {
                text,
                category,
                offline,
            } => quotes::add(app, text, category, *offline).await,
            Command::List { category } => quotes::list(app, category.as_deref()).await,
            Command::Random { category } => quotes::random(app, category.as_deref()).await,
            Command::Categories => quotes::categories(app).await,
            Command::Export { out } => quotes::export(app, out.as_deref()).await,
            Command::Import { file } => quotes::import(app, file).await,
            Command::Sync => sync::run(app).await,
            Command::Category { cmd } => cmd.run(app).await,
        }
    }
}
