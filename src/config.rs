//! Configuração carregada a partir de `freeze-requirements.toml`.
//!
//! A struct [`FreezeConfig`] contém os parâmetros configuráveis.
//! Valores não presentes no arquivo usam defaults sensíveis.
//! A variável de ambiente `FREEZE_REQUIREMENTS_TOOL` tem precedência sobre o arquivo,
//! e a flag `--tool` da CLI tem precedência sobre ambos.

use serde::Deserialize;
use std::path::Path;

use crate::error::{FreezeError, Result};
use crate::jobs::DEFAULT_TOOL;

/// Nome do arquivo de configuração procurado no diretório inicial.
pub const CONFIG_FILE: &str = "freeze-requirements.toml";

/// Variável de ambiente que sobrescreve a ferramenta de lock.
pub const TOOL_ENV: &str = "FREEZE_REQUIREMENTS_TOOL";

/// Configuração de nível superior carregada de `freeze-requirements.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FreezeConfig {
    /// Programa usado para compilar os requirements (ex.: `pip-compile`).
    #[serde(default = "default_tool")]
    pub tool: String,
}

// Valor padrão para a ferramenta: "pip-compile".
fn default_tool() -> String {
    DEFAULT_TOOL.to_string()
}

impl Default for FreezeConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
        }
    }
}

impl FreezeConfig {
    /// Carrega a configuração de `freeze-requirements.toml` em `dir`.
    /// Usa valores padrão se o arquivo não existir.
    pub fn load(dir: &Path) -> Result<Self> {
        let config = Self::from_file(&dir.join(CONFIG_FILE))?;
        config.with_env_override(std::env::var(TOOL_ENV).ok())
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        let config = toml::from_str::<FreezeConfig>(&contents)?;
        config.validate()
    }

    // Valor vindo do ambiente substitui o do arquivo quando não vazio.
    fn with_env_override(mut self, tool: Option<String>) -> Result<Self> {
        if let Some(tool) = tool.filter(|t| !t.trim().is_empty()) {
            self.tool = tool;
        }
        self.validate()
    }

    /// Aplica o override da CLI, que vence arquivo e ambiente.
    pub fn with_tool(mut self, tool: Option<String>) -> Result<Self> {
        if let Some(tool) = tool {
            self.tool = tool;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.tool.trim().is_empty() {
            return Err(FreezeError::Config("`tool` must not be empty".into()));
        }
        Ok(self)
    }
}
