//! Language server backend
//!
//! Keeps open documents in memory (FULL sync) and answers semantic token
//! requests by classifying the stored text.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, InitializeParams, InitializeResult, InitializedParams, MessageType,
    Range, SemanticTokens, SemanticTokensFullOptions, SemanticTokensOptions, SemanticTokensParams,
    SemanticTokensRangeParams, SemanticTokensRangeResult, SemanticTokensResult,
    SemanticTokensServerCapabilities, ServerCapabilities, ServerInfo, TextDocumentSyncCapability,
    TextDocumentSyncKind, Url, WorkDoneProgressOptions,
};
use tower_lsp::{Client, LanguageServer, LspService, Server};
use tracing::{debug, info, warn, Level};

use crate::config::Settings;
use crate::semantic;

/// LSP Backend state
pub struct Backend {
    /// LSP client for sending notifications
    client: Client,
    /// Document store for open documents
    documents: Arc<RwLock<HashMap<Url, String>>>,
    /// Settings from `apib.toml`, replaced on initialize
    settings: Arc<RwLock<Settings>>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
            settings: Arc::new(RwLock::new(Settings::default())),
        }
    }

    async fn get_document(&self, uri: &Url) -> Option<String> {
        let docs = self.documents.read().await;
        docs.get(uri).cloned()
    }

    async fn store_document(&self, uri: Url, text: String) {
        let mut docs = self.documents.write().await;
        docs.insert(uri, text);
    }

    async fn remove_document(&self, uri: &Url) {
        let mut docs = self.documents.write().await;
        docs.remove(uri);
    }

    /// Load `apib.toml` from the workspace root, keeping defaults on failure
    async fn load_settings(&self, root: Option<PathBuf>) {
        let Some(root) = root else {
            debug!("No workspace root, using default settings");
            return;
        };

        match Settings::discover(&root) {
            Ok(settings) => {
                info!("Loaded settings for {}", root.display());
                *self.settings.write().await = settings;
            }
            Err(e) => {
                warn!("{}", e);
                self.client
                    .log_message(MessageType::WARNING, format!("apib: {e}"))
                    .await;
            }
        }
    }

    /// Classify a stored document into encoded tokens
    async fn tokens(&self, uri: &Url, range: Option<Range>) -> Option<SemanticTokens> {
        let Some(text) = self.get_document(uri).await else {
            warn!("Document not found for semantic tokens: {}", uri);
            return None;
        };

        let settings = self.settings.read().await;
        let tokens = semantic::document_tokens(&text, &settings.highlight, range);
        debug!("Generated {} semantic tokens for {}", tokens.len(), uri);

        Some(SemanticTokens {
            result_id: None,
            data: semantic::encode(&tokens),
        })
    }
}

/// Workspace root from the initialize request, if it is a local path
#[allow(deprecated)]
fn workspace_root(params: &InitializeParams) -> Option<PathBuf> {
    params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| &folder.uri)
        .or(params.root_uri.as_ref())
        .and_then(|uri| uri.to_file_path().ok())
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        info!("apib LSP server initializing");
        self.load_settings(workspace_root(&params)).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                semantic_tokens_provider: Some(
                    SemanticTokensServerCapabilities::SemanticTokensOptions(
                        SemanticTokensOptions {
                            legend: semantic::legend(),
                            full: Some(SemanticTokensFullOptions::Bool(true)),
                            range: Some(true),
                            work_done_progress_options: WorkDoneProgressOptions::default(),
                        },
                    ),
                ),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "apib-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("apib LSP server initialized");
        self.client
            .log_message(MessageType::INFO, "API Blueprint language server ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        info!("apib LSP server shutting down");
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        debug!("Document opened: {}", params.text_document.uri);
        self.store_document(params.text_document.uri, params.text_document.text)
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        debug!("Document changed: {}", params.text_document.uri);
        // FULL sync: the only change carries the whole text
        if let Some(change) = params.content_changes.into_iter().next() {
            self.store_document(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        debug!("Document saved: {}", params.text_document.uri);
        if let Some(text) = params.text {
            self.store_document(params.text_document.uri, text).await;
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        debug!("Document closed: {}", params.text_document.uri);
        self.remove_document(&params.text_document.uri).await;
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let uri = params.text_document.uri;
        debug!("Semantic tokens request for: {}", uri);

        Ok(self
            .tokens(&uri, None)
            .await
            .map(SemanticTokensResult::Tokens))
    }

    async fn semantic_tokens_range(
        &self,
        params: SemanticTokensRangeParams,
    ) -> Result<Option<SemanticTokensRangeResult>> {
        let uri = params.text_document.uri;
        debug!("Semantic tokens range request for: {}", uri);

        Ok(self
            .tokens(&uri, Some(params.range))
            .await
            .map(SemanticTokensRangeResult::Tokens))
    }
}

/// Install the stderr tracing subscriber
///
/// stdout carries protocol traffic (or CLI output), so logs go to stderr.
/// `RUST_LOG` directives are combined with `default_level`.
pub fn init_tracing(default_level: Level) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the language server over stdio until the client disconnects
pub async fn run_server() {
    init_tracing(Level::INFO);

    info!(
        "Starting API Blueprint Language Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(Backend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
