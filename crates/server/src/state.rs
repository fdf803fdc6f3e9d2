use gist_summarize::Summarizer;

/// Shared, read-only application state constructed once at startup.
pub struct AppState {
    pub summarizer: Summarizer,
    pub templates: minijinja::Environment<'static>,
}

impl AppState {
    pub fn new(summarizer: Summarizer) -> Result<Self, minijinja::Error> {
        let mut templates = minijinja::Environment::new();
        templates.add_template("index.html", include_str!("../templates/index.html"))?;
        templates.add_template("upload.html", include_str!("../templates/upload.html"))?;
        Ok(Self {
            summarizer,
            templates,
        })
    }
}
