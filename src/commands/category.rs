use anyhow::Result;

use super::CommandRunner;
use crate::app::App;
use crate::cli;

impl CommandRunner for cli::CategoryCmd {
    async fn run(&self, app: &App) -> Result<()> {
        let store = app.store.lock().await;
        match self {
            cli::CategoryCmd::Get => {
                match store.last_selected_category()? {
                    Some(category) => println!("{category}"),
                    None => println!("all"),
                }
                Ok(())
            }
            cli::CategoryCmd::Set { value } => {
                store.set_last_selected_category(value)?;
                log::info!("✅ Remembered category filter '{}'", value);
                Ok(())
            }
        }
    }
}
