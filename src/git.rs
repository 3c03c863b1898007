//! Descoberta da raiz do repositório git via libgit2.
//!
//! O `pip-compile` resolve os arquivos de entrada relativos ao diretório
//! de trabalho, então todos os jobs rodam a partir da raiz retornada aqui.

use git2::Repository;
use std::path::{Path, PathBuf};

use crate::error::{FreezeError, Result};

/// Retorna o diretório de trabalho de nível superior do repositório que contém `start`.
///
/// A busca sobe pelos diretórios pais como `git rev-parse --show-toplevel`.
/// Falha fora de um repositório ou em repositórios bare.
pub fn repo_root(start: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(start).map_err(|source| FreezeError::RepoRoot {
        path: start.to_path_buf(),
        source,
    })?;

    let workdir = repo
        .workdir()
        .ok_or_else(|| FreezeError::BareRepository(repo.path().to_path_buf()))?;

    // libgit2 devolve o workdir com barra final; canonicalize normaliza.
    Ok(workdir.canonicalize()?)
}
