//! Blog generation command

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{OutputFormat, print_formatted, print_progress};
use crate::config::Config;
use crate::form::{AudienceLevel, BlogRequest, DEFAULT_WORD_COUNT, FormState, ValidationError};
use crate::service::GenerationClient;
use crate::state::RequestError;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Blog post title (up to 75 characters)
    #[arg(short, long)]
    pub title: String,

    /// Keyword to work into the post (repeatable, up to 5)
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,

    /// Approximate length in words (0-2000)
    #[arg(short, long, default_value = DEFAULT_WORD_COUNT)]
    pub words: String,

    /// Audience level
    #[arg(short, long, value_enum, default_value = "beginner")]
    pub level: AudienceLevel,

    /// Service URL (overrides the configured endpoint)
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl GenerateArgs {
    /// Fill a form exactly as a user would, chip by chip
    fn to_form(&self) -> Result<FormState, ValidationError> {
        let mut form = FormState::default();
        form.title = self.title.clone();
        form.word_count = self.words.clone();
        form.audience = self.level;
        for keyword in &self.keywords {
            form.add_keyword(keyword)?;
        }
        Ok(form)
    }

    fn to_request(&self) -> Result<BlogRequest, ValidationError> {
        self.to_form()?.validate()
    }

    /// Client for `--endpoint`, or the configured service
    fn client(&self, config: &Config) -> Result<GenerationClient> {
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| config.service.endpoint.clone());
        GenerationClient::new(endpoint, config.service.timeout())
    }
}

#[derive(Serialize)]
struct GenerateResult {
    title: String,
    words: u32,
    level: AudienceLevel,
    keywords: Vec<String>,
    markdown: String,
}

pub async fn run(args: GenerateArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let request = args.to_request().map_err(RequestError::from)?;

    let config = Config::load()?;
    let client = args.client(&config)?;

    print_progress(
        &format!("Generating \"{}\" via {}...", request.title, client.endpoint()),
        format,
        quiet,
    );

    let result = generate(&client, request).await?;
    print_formatted(&result, format, |r| r.markdown.clone());
    Ok(())
}

async fn generate(
    client: &GenerationClient,
    request: BlogRequest,
) -> Result<GenerateResult, RequestError> {
    let markdown = client.generate(&request).await.map_err(|e| {
        tracing::error!("Generation failed: {}", e);
        RequestError::from(&e)
    })?;

    Ok(GenerateResult {
        title: request.title,
        words: request.words,
        level: request.audience,
        keywords: request.keywords,
        markdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(title: &str, keywords: &[&str], words: &str) -> GenerateArgs {
        GenerateArgs {
            title: title.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            words: words.to_string(),
            level: AudienceLevel::Intermediate,
            endpoint: None,
        }
    }

    #[test]
    fn test_to_request() {
        let request = args("Traits", &["generics", "dyn"], "600").to_request().unwrap();
        assert_eq!(request.title, "Traits");
        assert_eq!(request.words, 600);
        assert_eq!(request.audience, AudienceLevel::Intermediate);
        assert_eq!(request.keywords, ["generics", "dyn"]);
    }

    #[test]
    fn test_too_many_keywords() {
        let result = args("Traits", &["a", "b", "c", "d", "e", "f"], "600").to_request();
        assert_eq!(result, Err(ValidationError::TooManyKeywords));
    }

    #[test]
    fn test_validation_order_matches_form() {
        assert_eq!(args(" ", &[], "x").to_request(), Err(ValidationError::EmptyTitle));
        assert_eq!(
            args("Traits", &[], "2500").to_request(),
            Err(ValidationError::WordCountTooLarge)
        );
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_input_before_loading_config() {
        let err = run(args("", &[], "750"), OutputFormat::Text, true)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please add a blog post title.");
    }

    async fn serve(status: usize, body: &str) -> (mockito::ServerGuard, mockito::Mock, GenerateArgs) {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/blog")
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;
        let mut args = args("Traits", &["generics", "dyn"], "600");
        args.endpoint = Some(format!("{}/blog", server.url()));
        (server, mock, args)
    }

    #[test]
    fn test_endpoint_flag_overrides_config() {
        let config = Config::default();
        let client = args("Traits", &[], "600").client(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:5001/blog");

        let mut flagged = args("Traits", &[], "600");
        flagged.endpoint = Some("http://127.0.0.1:8080/blog".to_string());
        let client = flagged.client(&config).unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:8080/blog");
    }

    #[tokio::test]
    async fn test_generate_returns_markdown() {
        let (_server, mock, args) = serve(200, "# Traits\n\nShared behavior").await;
        let client = args.client(&Config::default()).unwrap();

        let result = generate(&client, args.to_request().unwrap()).await.unwrap();

        assert_eq!(result.markdown, "# Traits\n\nShared behavior");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Traits",
                "words": 600,
                "level": "Intermediate",
                "keywords": ["generics", "dyn"],
                "markdown": "# Traits\n\nShared behavior",
            })
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_maps_service_errors() {
        for (status, message) in [
            (400, "Invalid request. Please check your input."),
            (500, "An error occurred. Please try again later."),
            (503, "An error occurred. Please try again later."),
        ] {
            let (_server, _mock, args) = serve(status, "nope").await;
            let client = args.client(&Config::default()).unwrap();

            let err = generate(&client, args.to_request().unwrap())
                .await
                .err()
                .unwrap();

            assert_eq!(err.to_string(), message, "status {}", status);
        }
    }
}
