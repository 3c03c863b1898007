//! Resumo da execução no terminal com saída colorida.
//!
//! Usa a crate `console` para estilização. O [`RunReport`] imprime uma linha
//! por job depois que todos os workers terminaram.

use console::Style;

use crate::jobs::{JobResult, RunSummary};

/// Formata o resultado final de uma execução.
pub struct RunReport {
    // Estilo verde para jobs bem-sucedidos.
    green: Style,
    // Estilo vermelho para jobs que falharam.
    red: Style,
    // Estilo amarelo para slots sem resultado.
    yellow: Style,
}

impl Default for RunReport {
    fn default() -> Self {
        Self {
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
        }
    }
}

impl RunReport {
    /// Uma linha por slot, na ordem dos jobs.
    pub fn lines(&self, summary: &RunSummary) -> Vec<String> {
        summary
            .results
            .iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                Some(result) => self.result_line(result),
                None => format!(
                    "  {} job {index}: no result recorded",
                    self.yellow.apply_to("?")
                ),
            })
            .collect()
    }

    fn result_line(&self, result: &JobResult) -> String {
        match result.exit_code {
            Some(0) => format!(
                "  {} {} ({}ms)",
                self.green.apply_to("✓"),
                result.command,
                result.duration_ms
            ),
            Some(code) => format!(
                "  {} {} (exit {code})",
                self.red.apply_to("✗"),
                result.command
            ),
            None => format!(
                "  {} {} (no exit code)",
                self.red.apply_to("✗"),
                result.command
            ),
        }
    }

    /// Imprime o resumo no stderr, mantendo o stdout livre para `--json`.
    pub fn print(&self, summary: &RunSummary) {
        for line in self.lines(summary) {
            eprintln!("{line}");
        }
        let failed = summary.failed_jobs();
        if failed.is_empty() {
            eprintln!(
                "{}",
                self.green.apply_to(format!(
                    "All {} jobs succeeded in {}ms",
                    summary.results.len(),
                    summary.duration_ms()
                ))
            );
        } else {
            eprintln!(
                "{}",
                self.red.apply_to(format!(
                    "{} of {} jobs failed",
                    failed.len(),
                    summary.results.len()
                ))
            );
        }
    }

    /// Imprime o resumo formatado em JSON.
    pub fn print_json(summary: &RunSummary) -> crate::error::Result<()> {
        println!("{}", serde_json::to_string_pretty(summary)?);
        Ok(())
    }
}
