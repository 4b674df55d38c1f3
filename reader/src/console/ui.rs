use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::config::OutputFormat;
use crate::view::ScreenView;

/// Format one screen update for the console.
pub fn format_view(view: &ScreenView, format: OutputFormat) -> std::io::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n", view.to_text())),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(view)?;
            let Some(obj) = value.as_object_mut() else {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "screen update is not a JSON object",
                ));
            };
            obj.insert("type".into(), "screen".into());
            Ok(format!("{value}\n"))
        }
    }
}

pub async fn write_view<W>(output: &mut W, view: &ScreenView, format: OutputFormat) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(format_view(view, format)?.as_bytes()).await?;
    output.flush().await
}
