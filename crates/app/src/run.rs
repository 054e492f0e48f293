//! Read, render, write.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tplr_application::{CancellationReceiver, CancellationToken, ProviderGateway, RenderTemplate};
use tplr_domain::has_error_markers;
use tplr_infrastructure::default_gateway;

use crate::cli::Arguments;

/// Runs one invocation end to end.
///
/// # Errors
///
/// Fails when the source cannot be read, the AWS providers cannot be
/// initialized, or the output cannot be written. Placeholders that fail to
/// resolve are marked inline and do not fail the run.
pub async fn run(args: Arguments) -> Result<()> {
    let document = read_source(&args.source).await?;

    let gateway = default_gateway(&args.aws_settings())
        .await
        .context("initialize AWS providers")?;

    let token = CancellationToken::new();
    cancel_on_interrupt(token.clone());

    let rendered = render_document(&args, &document, gateway, token.receiver()).await;
    write_output(args.dest.as_deref(), &rendered).await
}

/// Reads the template file.
///
/// # Errors
///
/// Returns an error naming the path if the file cannot be read.
pub async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read file {}", path.display()))
}

/// Renders `document` with the environment and deadline from `args`.
pub async fn render_document(
    args: &Arguments,
    document: &str,
    gateway: ProviderGateway,
    cancel: CancellationReceiver,
) -> String {
    let mut renderer = RenderTemplate::new(gateway);
    if let Some(timeout) = args.call_timeout() {
        renderer = renderer.with_call_timeout(timeout);
    }

    let rendered = renderer
        .render_with_cancellation(document, &args.env, cancel)
        .await;

    if has_error_markers(&rendered) {
        tracing::warn!(
            source = %args.source.display(),
            "Output contains unresolved placeholders"
        );
    }
    rendered
}

/// Writes the rendered document to `dest`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error naming the destination if the write fails.
pub async fn write_output(dest: Option<&Path>, rendered: &str) -> Result<()> {
    match dest {
        Some(path) => tokio::fs::write(path, rendered)
            .await
            .with_context(|| format!("write file {}", path.display())),
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(rendered.as_bytes())
                .await
                .context("write to stdout")?;
            stdout.flush().await.context("flush stdout")
        }
    }
}

fn cancel_on_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling pending lookups");
            token.cancel();
        }
    });
}
