//! Placeholder substitution in Word documents.
//!
//! A `.docx` is a zip of XML parts. The body, headers and footers are scanned
//! paragraph by paragraph: the text of all `<w:t>` runs in a paragraph is
//! joined, so a placeholder that Word split across runs is still found. When a
//! paragraph holds a placeholder, its filled text goes into the first run and
//! the remaining runs are emptied; the formatting of the first run wins.

use crate::documents::TemplateError;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Values for the `{{ key }}` placeholders of a template.
pub type TemplateContext = HashMap<String, String>;

pub fn context<const N: usize>(pairs: [(&str, String); N]) -> TemplateContext {
    pairs.into_iter().map(|(key, value)| (key.to_owned(), value)).collect()
}

struct Patterns {
    paragraph: Regex,
    text_run: Regex,
    placeholder: Regex,
}

impl Patterns {
    fn compile() -> Result<Self, TemplateError> {
        let compile = |pattern: &str| Regex::new(pattern).map_err(|e| TemplateError::Pattern(e.to_string()));
        Ok(Self {
            // Opening tags only; self-closing `<w:p .../>` and `<w:t .../>` hold no text.
            paragraph: compile(r"(?s)<w:p(?:\s(?:[^>]*[^>/])?)?>.*?</w:p>")?,
            text_run: compile(r"(?s)<w:t(?:\s(?:[^>]*[^>/])?)?>(.*?)</w:t>")?,
            placeholder: compile(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")?,
        })
    }
}

/// Position of a paragraph inside a template, for error messages.
struct Location<'a> {
    path: &'a Path,
    part: &'a str,
    line: usize,
    paragraph: usize,
}

/// Returns a copy of the `.docx` in `template` with every placeholder filled.
/// Parts other than the body, headers and footers are copied unchanged.
pub fn render_docx(path: &Path, template: &[u8], context: &TemplateContext) -> Result<Vec<u8>, TemplateError> {
    let patterns = Patterns::compile()?;
    let archive_error = |error: &dyn std::fmt::Display| TemplateError::Archive {
        path: path.to_path_buf(),
        message: error.to_string(),
    };

    let mut archive = ZipArchive::new(Cursor::new(template)).map_err(|e| archive_error(&e))?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(|e| archive_error(&e))?;
        let name = entry.name().to_owned();
        if entry.is_dir() {
            writer.add_directory(name, entry_options()).map_err(|e| archive_error(&e))?;
            continue;
        }

        let mut content = Vec::new();
        entry.read_to_end(&mut content).map_err(|e| archive_error(&e))?;
        if is_text_part(&name) {
            let xml = String::from_utf8(content).map_err(|e| archive_error(&e))?;
            content = fill_part(&xml, context, &patterns, path, &name)?.into_bytes();
        }

        writer.start_file(name, entry_options()).map_err(|e| archive_error(&e))?;
        writer.write_all(&content).map_err(|e| archive_error(&e))?;
    }

    let cursor = writer.finish().map_err(|e| archive_error(&e))?;
    Ok(cursor.into_inner())
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

fn is_text_part(name: &str) -> bool {
    name == "word/document.xml"
        || ((name.starts_with("word/header") || name.starts_with("word/footer")) && name.ends_with(".xml"))
}

fn fill_part(
    xml: &str,
    context: &TemplateContext,
    patterns: &Patterns,
    path: &Path,
    part: &str,
) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(xml.len());
    let mut last = 0;
    for (index, paragraph) in patterns.paragraph.find_iter(xml).enumerate() {
        output.push_str(&xml[last..paragraph.start()]);
        let location = Location {
            path,
            part,
            line: xml[..paragraph.start()].matches('\n').count() + 1,
            paragraph: index + 1,
        };
        output.push_str(&fill_paragraph(paragraph.as_str(), context, patterns, &location)?);
        last = paragraph.end();
    }
    output.push_str(&xml[last..]);
    Ok(output)
}

fn fill_paragraph(
    paragraph: &str,
    context: &TemplateContext,
    patterns: &Patterns,
    location: &Location<'_>,
) -> Result<String, TemplateError> {
    let runs: Vec<Captures<'_>> = patterns.text_run.captures_iter(paragraph).collect();
    let text: String = runs
        .iter()
        .filter_map(|run| run.get(1))
        .map(|inner| inner.as_str())
        .collect();
    if !text.contains("{{") {
        return Ok(paragraph.to_owned());
    }

    let filled = fill_text(&text, context, patterns, location)?;

    let mut output = String::with_capacity(paragraph.len() + filled.len());
    let mut last = 0;
    for (index, run) in runs.iter().enumerate() {
        let Some(whole) = run.get(0) else { continue };
        output.push_str(&paragraph[last..whole.start()]);
        if index == 0 {
            output.push_str(r#"<w:t xml:space="preserve">"#);
            output.push_str(&filled);
            output.push_str("</w:t>");
        } else {
            output.push_str("<w:t/>");
        }
        last = whole.end();
    }
    output.push_str(&paragraph[last..]);
    Ok(output)
}

fn fill_text(
    text: &str,
    context: &TemplateContext,
    patterns: &Patterns,
    location: &Location<'_>,
) -> Result<String, TemplateError> {
    if patterns.placeholder.replace_all(text, "").contains("{{") {
        return Err(TemplateError::Unclosed {
            path: location.path.to_path_buf(),
            part: location.part.to_owned(),
            line: location.line,
            paragraph: location.paragraph,
            snippet: text.chars().take(80).collect(),
        });
    }

    let mut missing: Option<String> = None;
    let filled = patterns.placeholder.replace_all(text, |caps: &Captures<'_>| {
        let key = caps.get(1).map_or("", |m| m.as_str());
        match context.get(key) {
            Some(value) => escape_xml(value),
            None => {
                missing.get_or_insert_with(|| key.to_owned());
                String::new()
            }
        }
    });

    if let Some(key) = missing {
        return Err(TemplateError::UnknownPlaceholder {
            path: location.path.to_path_buf(),
            part: location.part.to_owned(),
            line: location.line,
            paragraph: location.paragraph,
            key,
        });
    }
    Ok(filled.into_owned())
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
