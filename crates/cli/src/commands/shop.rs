//! Interactive storefront.
//!
//! Reads one command per line, applies it to the session and prints the
//! current screen. Shopper mistakes are reported inline and the session
//! carries on; logs go to stderr.

use std::path::PathBuf;

use pocket_shop_storefront::error::AppError;
use pocket_shop_storefront::input::{self, Command, HELP, InputError};
use pocket_shop_storefront::screens::Renderer;
use pocket_shop_storefront::session::Session;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

const PROMPT: &str = "> ";

/// Run the storefront on stdin/stdout.
///
/// # Errors
///
/// Returns an error if configuration or the catalog is invalid, or if the
/// terminal cannot be read or written.
pub async fn run(catalog: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config(catalog)?;
    let catalog = super::load_catalog(&config).await?;

    tracing::info!(products = catalog.len(), title = %config.title, "Storefront opened");

    let mut shell = Shell::new(Session::new(catalog), Renderer::new(&config));
    shell
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;

    tracing::info!(
        items_in_cart = shell.session().cart().item_count(),
        "Storefront closed"
    );
    Ok(())
}

/// A session plus the renderer that draws it.
pub struct Shell {
    session: Session,
    renderer: Renderer,
}

impl Shell {
    #[must_use]
    pub const fn new(session: Session, renderer: Renderer) -> Self {
        Self { session, renderer }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Process input lines until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure or if a screen fails to render.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), Box<dyn std::error::Error>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let screen = self.renderer.render(&self.session)?;
        write_screen(&mut output, &screen).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(text) = self.handle(&line)? else {
                break;
            };
            write_screen(&mut output, &text).await?;
        }

        Ok(())
    }

    /// Handle one line, returning the text to show, or `None` to quit.
    fn handle(&mut self, line: &str) -> Result<Option<String>, AppError> {
        let action = match input::parse(line) {
            Ok(Command::Action(action)) => action,
            Ok(Command::Help) => return Ok(Some(HELP.to_string())),
            Ok(Command::Quit) => return Ok(None),
            Err(InputError::Empty) => return self.renderer.render(&self.session).map(Some),
            Err(e) => return Ok(Some(format!("! {e}"))),
        };

        match self.session.dispatch(action) {
            Ok(()) => {}
            Err(e) if e.is_user_error() => {
                let screen = self.renderer.render(&self.session)?;
                return Ok(Some(format!("! {e}\n\n{screen}")));
            }
            Err(e) => return Err(e),
        }

        self.renderer.render(&self.session).map(Some)
    }
}

async fn write_screen<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.write_all(PROMPT.as_bytes()).await?;
    output.flush().await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use pocket_shop_core::Catalog;

    use super::*;

    async fn drive(script: &str) -> (Shell, String) {
        let mut shell = Shell::new(
            Session::new(Arc::new(Catalog::default())),
            Renderer::default(),
        );
        let mut output = Vec::new();
        shell.run(script.as_bytes(), &mut output).await.unwrap();
        (shell, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_add_and_view_cart() {
        let (shell, output) = drive("add 1\nmore\nyes\ncart\n").await;
        assert_eq!(shell.session().cart().item_count(), 2);
        assert!(output.contains("Go to Cart (2)"));
        assert!(output.contains("[1] C2 RED - ₱70   [-] 2 [+]"));
    }

    #[tokio::test]
    async fn test_mistakes_do_not_end_session() {
        let (shell, output) = drive("dance\ninc 1\nadd 99\nadd 1\nyes\n").await;
        assert!(output.contains("! Unknown command 'dance'"));
        assert!(output.contains("! 'inc' is not available on the Home screen"));
        assert!(output.contains("! Unknown product: 99"));
        assert_eq!(shell.session().cart().item_count(), 1);
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let (shell, output) = drive("help\nquit\nadd 1\nyes\n").await;
        assert!(output.contains("Navigation:"));
        assert!(shell.session().cart().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_flow() {
        let (shell, output) =
            drive("add 2\n+\n+\nyes\ncheckout\npay\nyes\n").await;
        assert!(output.contains("Are you sure you want to proceed with the checkout?"));
        assert!(output.contains("Checkout Successful"));
        assert!(shell.session().cart().is_empty());
        assert_eq!(shell.session().last_receipt().unwrap().item_count, 3);
    }
}
