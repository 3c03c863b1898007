//! Interface de linha de comando baseada em clap.
//!
//! Define a struct [`Cli`] com as flags (--tool, --dir, --dry-run, --json, --verbose).

use clap::Parser;
use std::path::PathBuf;

/// Regenera os arquivos de requirements congelados rodando pip-compile em paralelo.
#[derive(Debug, Parser)]
#[command(name = "freeze-requirements", version, about)]
pub struct Cli {
    /// Programa de lock a usar no lugar de `pip-compile`.
    #[arg(long, value_name = "PROGRAM")]
    pub tool: Option<String>,

    /// Diretório a partir do qual a raiz do repositório é descoberta.
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Apenas mostra os comandos, sem executá-los.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Imprime o resumo da execução em JSON no stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Habilita saída detalhada (verbose).
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}
