//! Template lookup, output naming and delivery of generated documents.

use crate::documents::docx::{render_docx, TemplateContext};
use crate::documents::TemplateError;
use actix_web::http::header::{Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue};
use actix_web::HttpResponse;
use log::info;
use mime_guess::from_path;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// A filled document, already copied to the output directory.
#[derive(Debug)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    /// `200 OK` with the document as an attachment download. Names with
    /// non-ASCII characters (`N°`) also go out RFC 5987 encoded.
    pub fn into_response(self) -> HttpResponse {
        let mime = from_path(&self.file_name).first_or_octet_stream();
        let fallback: String = self
            .file_name
            .chars()
            .map(|c| if c.is_ascii() { c } else { '_' })
            .collect();
        let mut parameters = vec![DispositionParam::Filename(fallback)];
        if !self.file_name.is_ascii() {
            parameters.push(DispositionParam::FilenameExt(ExtendedValue {
                charset: Charset::Ext("UTF-8".to_owned()),
                language_tag: None,
                value: self.file_name.into_bytes(),
            }));
        }

        HttpResponse::Ok()
            .content_type(mime.as_ref())
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters,
            })
            .body(self.bytes)
    }
}

#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    templates_dir: PathBuf,
    output_dir: PathBuf,
}

impl TemplateRenderer {
    /// Creates both directories when they do not exist yet.
    pub fn open(templates_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> io::Result<Self> {
        let renderer = Self {
            templates_dir: templates_dir.into(),
            output_dir: output_dir.into(),
        };
        fs::create_dir_all(&renderer.templates_dir)?;
        fs::create_dir_all(&renderer.output_dir)?;
        Ok(renderer)
    }

    /// Fills `template` (relative to the templates directory) and saves the
    /// result as `{stem}.docx` in the output directory. On error nothing is
    /// written.
    pub fn render(
        &self,
        template: &str,
        context: &TemplateContext,
        stem: &str,
    ) -> Result<RenderedDocument, TemplateError> {
        let path = self.templates_dir.join(template);
        let source = fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TemplateError::Missing { path: path.clone() },
            _ => TemplateError::Archive {
                path: path.clone(),
                message: e.to_string(),
            },
        })?;

        let bytes = render_docx(&path, &source, context)?;
        let file_name = format!("{}.docx", sanitize_filename(stem));
        self.store(&file_name, &bytes)?;
        info!("Documento generado: {} (plantilla {})", file_name, template);

        Ok(RenderedDocument { file_name, bytes })
    }

    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<(), TemplateError> {
        let target = self.output_dir.join(file_name);
        let output_error = |source: io::Error| TemplateError::Output {
            path: target.clone(),
            source,
        };

        let mut temp = NamedTempFile::new_in(&self.output_dir).map_err(output_error)?;
        temp.write_all(bytes).map_err(output_error)?;
        temp.persist(&target).map_err(|e| output_error(e.error))?;
        Ok(())
    }
}

/// Replaces characters that are not allowed in file names.
pub fn sanitize_filename(stem: &str) -> String {
    stem.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            '\n' | '\r' => ' ',
            other => other,
        })
        .collect::<String>()
        .trim()
        .to_string()
}
