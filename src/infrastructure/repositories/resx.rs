//! ResX Resource Store Repository
//!
//! Reads and writes .NET `.resx` documents. Only `<data>` nodes belong to the
//! store. Resheaders, the inline schema and XML comments are left as written.
//!
//! A save that only appends entries keeps the existing text up to the
//! closing `</root>` byte for byte and inserts the new nodes there:
//!
//! ```xml
//!   <data name="EchoDisplayName" xml:space="preserve">
//!     <value>Echo</value>
//!     <comment>activity name</comment>
//!   </data>
//! ```

use std::fmt::Display;
use std::path::Path;

use quick_xml::escape::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::domain::entities::{ResourceEntry, ResourceStore};
use crate::domain::ports::file_system::{FileSystem, FsError};
use crate::domain::ports::resource_repository::{
    ResourceRepository, ResourceStoreError, ResourceStoreResult,
};
use crate::infrastructure::fs::LocalFs;

const ROOT_CLOSE: &str = "</root>";

/// Preamble of a newly created document
const RESX_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <resheader name="resmimetype">
    <value>text/microsoft-resx</value>
  </resheader>
  <resheader name="version">
    <value>2.0</value>
  </resheader>
  <resheader name="reader">
    <value>System.Resources.ResXResourceReader, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
  </resheader>
  <resheader name="writer">
    <value>System.Resources.ResXResourceWriter, System.Windows.Forms, Version=4.0.0.0, Culture=neutral, PublicKeyToken=b77a5c561934e089</value>
  </resheader>
"#;

/// ResX-based resource store repository
pub struct ResxResourceRepository {
    fs: LocalFs,
}

/// Child of `<data>` whose text is being collected
enum Field {
    Value,
    Comment,
}

impl ResxResourceRepository {
    /// Create a new repository with the default file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }

    /// Parse the `<data>` nodes of a document, in document order
    ///
    /// Empty content is an empty store.
    pub fn parse(content: &str, path: &Path) -> ResourceStoreResult<ResourceStore> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut reader = Reader::from_str(content);

        let mut entries = Vec::new();
        let mut current: Option<String> = None;
        let mut field: Option<Field> = None;
        let mut value = String::new();
        let mut comment: Option<String> = None;

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    return Err(parse_error(
                        path,
                        format!("{} (near byte {})", e, reader.buffer_position()),
                    ))
                }
            };

            match event {
                Event::Start(e) => match e.name().as_ref() {
                    b"data" => {
                        current = Some(data_name(&e, path)?);
                        value.clear();
                        comment = None;
                    }
                    b"value" if current.is_some() => field = Some(Field::Value),
                    b"comment" if current.is_some() => {
                        comment.get_or_insert_with(String::new);
                        field = Some(Field::Comment);
                    }
                    _ => {}
                },
                Event::Empty(e) => match e.name().as_ref() {
                    b"data" => entries.push(ResourceEntry::new(data_name(&e, path)?, "")),
                    b"comment" if current.is_some() => {
                        comment.get_or_insert_with(String::new);
                    }
                    _ => {}
                },
                Event::Text(t) => {
                    if let Some(target) = text_target(&field, &mut value, &mut comment) {
                        let text = t.unescape().map_err(|e| parse_error(path, e))?;
                        target.push_str(&text);
                    }
                }
                Event::CData(c) => {
                    if let Some(target) = text_target(&field, &mut value, &mut comment) {
                        target.push_str(&String::from_utf8_lossy(&c));
                    }
                }
                Event::End(e) => match e.name().as_ref() {
                    b"data" => {
                        if let Some(key) = current.take() {
                            entries.push(
                                ResourceEntry::new(key, std::mem::take(&mut value))
                                    .with_comment(comment.take()),
                            );
                        }
                        field = None;
                    }
                    b"value" | b"comment" => field = None,
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(ResourceStore::from_entries(entries))
    }

    /// Document text for `store`, given the file's current content
    ///
    /// When `store` only extends what `existing` holds, the existing text is
    /// kept and the new nodes go right before `</root>`. Otherwise a fresh
    /// document is written.
    pub fn render(
        existing: Option<&str>,
        store: &ResourceStore,
        path: &Path,
    ) -> ResourceStoreResult<String> {
        if let Some(content) = existing {
            if let Some(rendered) = Self::append_to(content, store, path)? {
                return Ok(rendered);
            }
        }

        let mut out = String::from(RESX_HEADER);
        for entry in store.entries() {
            push_data_node(&mut out, entry, "\n");
        }
        out.push_str(ROOT_CLOSE);
        out.push('\n');
        Ok(out)
    }

    fn append_to(
        content: &str,
        store: &ResourceStore,
        path: &Path,
    ) -> ResourceStoreResult<Option<String>> {
        let current = Self::parse(content, path)?;
        let Some(added) = store.entries().strip_prefix(current.entries()) else {
            return Ok(None);
        };
        if added.is_empty() {
            return Ok(Some(content.to_string()));
        }
        let Some(close) = content.rfind(ROOT_CLOSE) else {
            return Ok(None);
        };

        let newline = if content.contains("\r\n") { "\r\n" } else { "\n" };
        let (head, tail) = content.split_at(close);
        // Keep the indentation of `</root>` on its own line
        let (body, indent) = match head.rfind('\n') {
            Some(i) if head[i + 1..].trim().is_empty() => head.split_at(i + 1),
            _ => (head, ""),
        };

        let mut out = String::with_capacity(content.len() + added.len() * 128);
        out.push_str(body);
        if !out.ends_with('\n') {
            out.push_str(newline);
        }
        for entry in added {
            push_data_node(&mut out, entry, newline);
        }
        out.push_str(indent);
        out.push_str(tail);
        Ok(Some(out))
    }
}

impl Default for ResxResourceRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_error(path: &Path, message: impl Display) -> ResourceStoreError {
    ResourceStoreError::Parse {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

fn data_name(start: &BytesStart<'_>, path: &Path) -> ResourceStoreResult<String> {
    let attr = start
        .try_get_attribute("name")
        .map_err(|e| parse_error(path, e))?
        .ok_or_else(|| parse_error(path, "<data> element without a name attribute"))?;
    let name = attr.unescape_value().map_err(|e| parse_error(path, e))?;
    Ok(name.into_owned())
}

fn text_target<'a>(
    field: &Option<Field>,
    value: &'a mut String,
    comment: &'a mut Option<String>,
) -> Option<&'a mut String> {
    match field {
        Some(Field::Value) => Some(value),
        Some(Field::Comment) => comment.as_mut(),
        None => None,
    }
}

fn push_data_node(out: &mut String, entry: &ResourceEntry, nl: &str) {
    out.push_str(&format!(
        "  <data name=\"{}\" xml:space=\"preserve\">{nl}",
        escape(entry.key())
    ));
    out.push_str(&format!("    <value>{}</value>{nl}", escape(entry.value())));
    if let Some(comment) = entry.comment() {
        out.push_str(&format!("    <comment>{}</comment>{nl}", escape(comment)));
    }
    out.push_str(&format!("  </data>{nl}"));
}

impl ResourceRepository for ResxResourceRepository {
    fn load(&self, path: &Path) -> ResourceStoreResult<ResourceStore> {
        let content = self.fs.read(path).map_err(|e| match e {
            FsError::NotFound(_) => ResourceStoreError::NotFound(path.to_path_buf()),
            other => ResourceStoreError::Io {
                path: path.to_path_buf(),
                message: other.to_string(),
            },
        })?;

        Self::parse(&content, path)
    }

    fn save(&self, store: &ResourceStore, path: &Path) -> ResourceStoreResult<()> {
        let existing = match self.fs.read(path) {
            Ok(content) => Some(content),
            Err(FsError::NotFound(_)) => None,
            Err(e) => {
                return Err(ResourceStoreError::Io {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        let content = Self::render(existing.as_deref(), store, path)?;
        self.fs
            .write(path, &content)
            .map_err(|e| ResourceStoreError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}
