use std::path::{Path, PathBuf};

use crate::config::Config;

use super::document::discover_documents;
use super::markup::{MarkupError, MarkupRenderer, renderer_from_config};
use super::paths::{resolve, same_path};
use super::pipeline::{Pipeline, PipelineContext, PipelineError, ProcessingDocument};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("renderer setup failed: {0}")]
    Markup(#[from] MarkupError),

    #[error("failed to scan {}: {source}", dir.display())]
    Scan {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "{name} would be written to the layout template {}; rename the document or the template",
        template.display()
    )]
    TemplateCollision { name: String, template: PathBuf },

    #[error("failed to generate page for {name}: {source}")]
    Document {
        name: String,
        source: PipelineError,
    },
}

#[derive(Debug)]
pub struct BuildResult {
    /// Output pages, in the order they were finished
    pub pages: Vec<PathBuf>,
}

/// Generates one templated output page per source document in a directory.
pub struct Generator {
    config: Config,
    /// Directory scanned for documents; relative config paths resolve here
    dir: PathBuf,
}

impl Generator {
    pub fn new(config: Config, dir: PathBuf) -> Self {
        Self { config, dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Build with the renderer selected in the config.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let renderer = renderer_from_config(&self.config)?;
        self.build_with(renderer.as_ref())
    }

    /// Build with an explicit renderer.
    ///
    /// Each document runs through the whole pipeline before the next one
    /// starts. On error the run stops: pages finished earlier keep their
    /// final content and the failing page is left as the stage before the
    /// failure wrote it.
    pub fn build_with(&self, renderer: &dyn MarkupRenderer) -> Result<BuildResult, BuildError> {
        let source_suffix = self.config.source_suffix();
        let output_suffix = self.config.output_suffix();

        let documents = discover_documents(&self.dir, &source_suffix, &output_suffix).map_err(
            |e| BuildError::Scan {
                dir: self.dir.clone(),
                source: e,
            },
        )?;
        tracing::info!(
            "Found {} document(s) matching *{} in {}",
            documents.len(),
            source_suffix,
            self.dir.display()
        );

        let template_path = resolve(&self.dir, &self.config.template);

        // Checked up front so nothing is written when the layout is a target
        if let Some(doc) = documents
            .iter()
            .find(|doc| same_path(&doc.output_path, &template_path))
        {
            return Err(BuildError::TemplateCollision {
                name: doc.name.clone(),
                template: template_path,
            });
        }

        let pipeline = Pipeline::default_pipeline();
        tracing::debug!(
            stages = ?pipeline.stage_names(),
            template = %template_path.display(),
            "pipeline ready"
        );
        let ctx = PipelineContext::new(renderer, &template_path);

        let mut pages = Vec::with_capacity(documents.len());
        for doc in documents {
            let name = doc.name.clone();
            let mut batch = [ProcessingDocument::new(doc)];

            pipeline
                .run(&mut batch, &ctx)
                .map_err(|e| BuildError::Document { name, source: e })?;

            let [processed] = batch;
            tracing::info!(page = %processed.output_path().display(), "wrote page");
            pages.push(processed.doc.output_path);
        }

        Ok(BuildResult { pages })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::config::RendererKind;

    const LAYOUT: &str = "<html><body>{{ content }}</body></html>";

    /// Copies the source verbatim into the destination.
    struct Passthrough;

    impl MarkupRenderer for Passthrough {
        fn name(&self) -> &'static str {
            "passthrough"
        }

        fn render(&self, source: &Path, dest: &Path) -> Result<(), MarkupError> {
            std::fs::copy(source, dest).map_err(|e| MarkupError::Write {
                path: dest.to_path_buf(),
                source: e,
            })?;
            Ok(())
        }
    }

    /// Passthrough that deletes the layout once `after` documents have been
    /// rendered.
    struct DeletesLayout {
        layout: PathBuf,
        after: usize,
        calls: AtomicUsize,
    }

    impl MarkupRenderer for DeletesLayout {
        fn name(&self) -> &'static str {
            "deletes-layout"
        }

        fn render(&self, source: &Path, dest: &Path) -> Result<(), MarkupError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == self.after {
                std::fs::remove_file(&self.layout).unwrap();
            }
            Passthrough.render(source, dest)
        }
    }

    /// Passthrough that rewrites the layout before every document.
    struct RewritesLayout {
        layout: PathBuf,
        calls: AtomicUsize,
    }

    impl MarkupRenderer for RewritesLayout {
        fn name(&self) -> &'static str {
            "rewrites-layout"
        }

        fn render(&self, source: &Path, dest: &Path) -> Result<(), MarkupError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            std::fs::write(&self.layout, format!("<v{n}>{{{{ content }}}}</v{n}>")).unwrap();
            Passthrough.render(source, dest)
        }
    }

    fn site(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            std::fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    fn read(dir: &Path, name: &str) -> String {
        std::fs::read_to_string(dir.join(name)).unwrap()
    }

    fn generator(dir: &Path) -> Generator {
        Generator::new(Config::default(), dir.to_path_buf())
    }

    #[test]
    fn test_wraps_fragment_in_layout() {
        let dir = site(&[("a.markdown", "hello"), ("layout.html", LAYOUT)]);

        let result = generator(dir.path()).build_with(&Passthrough).unwrap();

        assert_eq!(result.pages, vec![dir.path().join("a.html")]);
        assert_eq!(read(dir.path(), "a.html"), "<html><body>hello</body></html>");
    }

    #[test]
    fn test_one_page_per_source_and_none_for_others() {
        let dir = site(&[
            ("a.markdown", "alpha"),
            ("b.markdown", "beta"),
            ("c.markdown", "gamma"),
            ("notes.txt", "ignored"),
            ("readme.md", "ignored"),
            ("layout.html", LAYOUT),
        ]);

        let result = generator(dir.path()).build_with(&Passthrough).unwrap();

        let mut pages = result.pages.clone();
        pages.sort();
        assert_eq!(
            pages,
            vec![
                dir.path().join("a.html"),
                dir.path().join("b.html"),
                dir.path().join("c.html"),
            ]
        );
        assert!(!dir.path().join("notes.html").exists());
        assert!(!dir.path().join("readme.html").exists());
        assert_eq!(read(dir.path(), "b.html"), "<html><body>beta</body></html>");
    }

    #[test]
    fn test_fragment_is_substring_of_output() {
        let fragment = "<h1>Title</h1>\n<p>a &amp; b</p>\n";
        let dir = site(&[
            ("page.markdown", fragment),
            ("layout.html", "<!doctype html>\n<main>\n{{ content }}\n</main>\n"),
        ]);

        generator(dir.path()).build_with(&Passthrough).unwrap();

        let html = read(dir.path(), "page.html");
        assert!(html.contains(fragment));
        assert_eq!(html, format!("<!doctype html>\n<main>\n{fragment}\n</main>\n"));
    }

    #[test]
    fn test_build_is_idempotent() {
        let dir = site(&[
            ("a.markdown", "one"),
            ("b.markdown", "two"),
            ("layout.html", LAYOUT),
        ]);
        let generator = generator(dir.path());

        generator.build_with(&Passthrough).unwrap();
        let first = (read(dir.path(), "a.html"), read(dir.path(), "b.html"));

        generator.build_with(&Passthrough).unwrap();
        let second = (read(dir.path(), "a.html"), read(dir.path(), "b.html"));

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_matching_documents() {
        let dir = site(&[("notes.txt", "x"), ("layout.html", LAYOUT)]);

        let result = generator(dir.path()).build_with(&Passthrough).unwrap();

        assert!(result.pages.is_empty());
        let mut entries: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        assert_eq!(entries, vec!["layout.html", "notes.txt"]);
    }

    #[test]
    fn test_no_documents_does_not_need_layout() {
        let dir = site(&[]);
        let result = generator(dir.path()).build_with(&Passthrough).unwrap();
        assert!(result.pages.is_empty());
    }

    #[test]
    fn test_missing_layout_is_fatal() {
        let dir = site(&[("a.markdown", "hello")]);

        let err = generator(dir.path()).build_with(&Passthrough).unwrap_err();

        assert!(matches!(
            err,
            BuildError::Document {
                source: PipelineError::Layout(_),
                ..
            }
        ));
        // Left in its pre-templating state
        assert_eq!(read(dir.path(), "a.html"), "hello");
    }

    #[test]
    fn test_document_targeting_layout_is_rejected() {
        let dir = site(&[
            ("a.markdown", "alpha"),
            ("layout.markdown", "layout doc"),
            ("layout.html", LAYOUT),
        ]);
        let mut config = Config::default();
        config.renderer.kind = RendererKind::Builtin;

        let err = Generator::new(config, dir.path().to_path_buf())
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::TemplateCollision { ref name, .. } if name == "layout.markdown"
        ));
        assert_eq!(read(dir.path(), "layout.html"), LAYOUT);
        assert!(!dir.path().join("a.html").exists());
    }

    #[test]
    fn test_document_targeting_relative_layout_path_is_rejected() {
        let dir = site(&[("page.markdown", "x"), ("page.html", LAYOUT)]);
        let config = Config {
            template: PathBuf::from("./page.html"),
            ..Config::default()
        };

        let err = Generator::new(config, dir.path().to_path_buf())
            .build_with(&Passthrough)
            .unwrap_err();

        assert!(matches!(err, BuildError::TemplateCollision { .. }));
        assert_eq!(read(dir.path(), "page.html"), LAYOUT);
    }

    #[test]
    fn test_layout_lost_mid_run_keeps_finished_pages() {
        let dir = site(&[
            ("a.markdown", "first"),
            ("b.markdown", "second"),
            ("layout.html", LAYOUT),
        ]);
        let renderer = DeletesLayout {
            layout: dir.path().join("layout.html"),
            after: 1,
            calls: AtomicUsize::new(0),
        };

        let err = generator(dir.path()).build_with(&renderer).unwrap_err();
        let BuildError::Document { name, .. } = &err else {
            panic!("expected a document error, got {err:?}");
        };

        // Listing order is unspecified; whichever ran first is finished
        let (failed, finished) = if name == "a.markdown" {
            (("a.html", "first"), ("b.html", "second"))
        } else {
            (("b.html", "second"), ("a.html", "first"))
        };
        assert_eq!(
            read(dir.path(), finished.0),
            format!("<html><body>{}</body></html>", finished.1)
        );
        assert_eq!(read(dir.path(), failed.0), failed.1);
    }

    #[test]
    fn test_layout_is_reloaded_for_every_document() {
        let dir = site(&[("a.markdown", "x"), ("b.markdown", "y")]);
        let renderer = RewritesLayout {
            layout: dir.path().join("layout.html"),
            calls: AtomicUsize::new(0),
        };

        let result = generator(dir.path()).build_with(&renderer).unwrap();

        let wrappers: Vec<String> = result
            .pages
            .iter()
            .map(|p| std::fs::read_to_string(p).unwrap())
            .collect();
        assert!(wrappers[0].starts_with("<v0>"));
        assert!(wrappers[1].starts_with("<v1>"));
    }

    #[test]
    fn test_custom_extensions_and_template() {
        let dir = site(&[
            ("post.md", "body"),
            ("post.markdown", "ignored"),
            ("page.tmpl", "[{{ content }}]"),
        ]);
        let config = Config {
            source_extension: "md".to_string(),
            output_extension: "htm".to_string(),
            template: PathBuf::from("page.tmpl"),
            ..Config::default()
        };

        let result = Generator::new(config, dir.path().to_path_buf())
            .build_with(&Passthrough)
            .unwrap();

        assert_eq!(result.pages, vec![dir.path().join("post.htm")]);
        assert_eq!(read(dir.path(), "post.htm"), "[body]");
    }

    #[test]
    fn test_build_with_builtin_renderer() {
        let dir = site(&[("a.markdown", "# Hi\n\nthere"), ("layout.html", LAYOUT)]);
        let mut config = Config::default();
        config.renderer.kind = RendererKind::Builtin;

        Generator::new(config, dir.path().to_path_buf()).build().unwrap();

        assert_eq!(
            read(dir.path(), "a.html"),
            "<html><body><h1>Hi</h1>\n<p>there</p>\n</body></html>"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_build_with_command_renderer() {
        let dir = site(&[("a.markdown", "hello"), ("layout.html", LAYOUT)]);
        let mut config = Config::default();
        config.renderer.command = vec!["cat".to_string()];

        Generator::new(config, dir.path().to_path_buf()).build().unwrap();

        assert_eq!(read(dir.path(), "a.html"), "<html><body>hello</body></html>");
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_failure_is_fatal() {
        let dir = site(&[("layout.html", LAYOUT)]);
        // Matched by name, but `cat` can't read a directory
        std::fs::create_dir(dir.path().join("drafts.markdown")).unwrap();
        let mut config = Config::default();
        config.renderer.command = vec!["cat".to_string()];

        let err = Generator::new(config, dir.path().to_path_buf())
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::Document {
                source: PipelineError::Markup(MarkupError::Failed { .. }),
                ..
            }
        ));
    }

    #[test]
    fn test_missing_directory_is_a_scan_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = generator(&dir.path().join("missing"))
            .build_with(&Passthrough)
            .unwrap_err();
        assert!(matches!(err, BuildError::Scan { .. }));
    }
}
