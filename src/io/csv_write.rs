use std::io::{self, Write};
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};
use tempfile::Builder;

use crate::error::{Result, ToolError};
use crate::model::{TEMPLATE_HEADER, TemplateRow};

/// Encodes the header and `rows` into `sink` and hands the flushed sink back.
pub fn encode_template<W: Write>(sink: W, rows: &[TemplateRow]) -> Result<W> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_writer(sink);

    writer.write_record(TEMPLATE_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|error| ToolError::Io(error.into_error()))
}

/// Writes the template to `path`.
///
/// Rows go to a temporary file next to `path` which replaces the target only
/// once it is complete; a failed run leaves any previous template untouched.
pub fn write_template(path: &Path, rows: &[TemplateRow]) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".l10n-template").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o644));
    }

    let temp = builder
        .tempfile_in(directory)
        .map_err(|source| output_error(path, source))?;
    let temp = encode_output(path, temp, rows)?;
    temp.persist(path)
        .map_err(|error| output_error(path, error.error))?;
    Ok(())
}

/// Like [`encode_template`], but every failure is reported against `path`.
fn encode_output<W: Write>(path: &Path, sink: W, rows: &[TemplateRow]) -> Result<W> {
    encode_template(sink, rows).map_err(|error| match error {
        ToolError::Io(source) => output_error(path, source),
        ToolError::Csv(error) => output_error(path, csv_io_error(error)),
        other => other,
    })
}

fn csv_io_error(error: csv::Error) -> io::Error {
    if !error.is_io_error() {
        return io::Error::other(error);
    }
    match error.into_kind() {
        csv::ErrorKind::Io(source) => source,
        kind => io::Error::other(format!("{kind:?}")),
    }
}

fn output_error(path: &Path, source: io::Error) -> ToolError {
    ToolError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}
