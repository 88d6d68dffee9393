//! Directive sources: the config-parser side of the plugin contract
//!
//! Reads hyprland-style config files, hands every `hotedge` value to the keyword
//! handler and follows `source = <path>` includes. Parse errors are collected,
//! never fatal: a bad directive is dropped and scanning goes on.

use crate::config::EdgesConfig;
use crate::services::hot_edge::{DirectiveError, HOTEDGE_KEYWORD};
use crate::utils::paths::{default_directive_file, expand_tilde, resolve_relative};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ключевое слово включения другого файла
const SOURCE_KEYWORD: &str = "source";

/// Проблема, найденная при разборе конфигурации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub origin: String,
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.origin, self.line, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DirectiveSource {
    files: Vec<PathBuf>,
    inline: Vec<String>,
}

impl DirectiveSource {
    pub fn new(files: Vec<PathBuf>, inline: Vec<String>) -> Self {
        Self { files, inline }
    }

    /// Пустой список `sources` означает `~/.config/hypr/hedge.conf`
    pub fn from_config(config: &EdgesConfig) -> Self {
        let mut files: Vec<PathBuf> = config.sources.iter().map(|s| expand_tilde(s)).collect();
        if files.is_empty() {
            files.extend(default_directive_file());
        }
        Self::new(files, config.directives.clone())
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Прочитать все источники и передать директивы обработчику
    pub fn load<F>(&self, mut handler: F) -> Vec<ConfigIssue>
    where
        F: FnMut(&str, &str) -> Result<(), DirectiveError>,
    {
        let mut issues = Vec::new();
        let mut visited = HashSet::new();

        for file in &self.files {
            self.load_file(file, &mut visited, &mut handler, &mut issues);
        }

        for (index, value) in self.inline.iter().enumerate() {
            if let Err(e) = handler(HOTEDGE_KEYWORD, value) {
                issues.push(ConfigIssue {
                    origin: "edges.directives".to_string(),
                    line: index + 1,
                    message: e.to_string(),
                });
            }
        }

        info!(
            "Источники директив прочитаны: файлов {}, встроенных директив {}, проблем {}",
            visited.len(),
            self.inline.len(),
            issues.len()
        );
        issues
    }

    fn load_file<F>(
        &self,
        path: &Path,
        visited: &mut HashSet<PathBuf>,
        handler: &mut F,
        issues: &mut Vec<ConfigIssue>,
    ) where
        F: FnMut(&str, &str) -> Result<(), DirectiveError>,
    {
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if !visited.insert(key) {
            debug!("Файл {:?} уже прочитан, повторное включение пропущено", path);
            return;
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                issues.push(ConfigIssue {
                    origin: path.display().to_string(),
                    line: 0,
                    message: format!("не удалось прочитать файл: {}", e),
                });
                return;
            }
        };

        debug!("Чтение директив из {:?}", path);
        let origin = path.display().to_string();
        for (index, raw) in text.lines().enumerate() {
            let Some((keyword, value)) = split_assignment(raw) else {
                continue;
            };

            match keyword.as_str() {
                HOTEDGE_KEYWORD => {
                    if let Err(e) = handler(&keyword, &value) {
                        issues.push(ConfigIssue {
                            origin: origin.clone(),
                            line: index + 1,
                            message: e.to_string(),
                        });
                    }
                }
                SOURCE_KEYWORD => {
                    let included = resolve_relative(&value, path);
                    self.load_file(&included, visited, handler, issues);
                }
                _ => {}
            }
        }
    }
}

/// Разобрать строку `ключ = значение`, отбросив комментарий.
/// `##` внутри значения означает литеральный `#`.
fn split_assignment(line: &str) -> Option<(String, String)> {
    let content = strip_comment(line);
    let (key, value) = content.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some((key.to_string(), value.trim().to_string()))
}

fn strip_comment(line: &str) -> String {
    let mut result = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '#' {
            if chars.peek() == Some(&'#') {
                chars.next();
                result.push('#');
                continue;
            }
            break;
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::hot_edge::parse_directive;

    fn collect(source: &DirectiveSource) -> (Vec<String>, Vec<ConfigIssue>) {
        let mut values = Vec::new();
        let issues = source.load(|_, value| {
            parse_directive(value)?;
            values.push(value.to_string());
            Ok(())
        });
        (values, issues)
    }

    #[test]
    fn test_split_assignment() {
        assert_eq!(
            split_assignment("  hotedge = DP-1,top,1,2,a,b,0 # comment"),
            Some(("hotedge".to_string(), "DP-1,top,1,2,a,b,0".to_string()))
        );
        assert_eq!(
            split_assignment("hotedge=DP-1,top,1,2,echo ##1,b,0"),
            Some(("hotedge".to_string(), "DP-1,top,1,2,echo #1,b,0".to_string()))
        );
        assert_eq!(split_assignment("# hotedge = x"), None);
        assert_eq!(split_assignment("general {"), None);
    }

    #[test]
    fn test_load_file_with_errors_and_includes() {
        let dir = tempfile::tempdir().unwrap();
        let main = dir.path().join("hyprland.conf");
        let edges = dir.path().join("edges.conf");

        fs::write(
            &main,
            "monitor = DP-1,preferred,auto,1\n\
             hotedge = DP-1,top,10,50,open,close,0\n\
             hotedge = DP-1,sideways,10,50,open,close,0\n\
             source = edges.conf\n",
        )
        .unwrap();
        fs::write(
            &edges,
            "hotedge = DP-1,left,5,40,open,close,1\n\
             source = hyprland.conf\n\
             hotedge = DP-1,bottom,5\n",
        )
        .unwrap();

        let source = DirectiveSource::new(
            vec![main.clone()],
            vec!["DP-2,right,1,2,a,b,0".to_string()],
        );
        let (values, issues) = collect(&source);

        assert_eq!(
            values,
            vec![
                "DP-1,top,10,50,open,close,0",
                "DP-1,left,5,40,open,close,1",
                "DP-2,right,1,2,a,b,0",
            ]
        );
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].line, 3);
        assert!(issues[0].message.contains("valid side"));
        assert_eq!(issues[1].origin, edges.display().to_string());
        assert_eq!(issues[1].line, 3);
    }

    #[test]
    fn test_default_source_is_dedicated_file() {
        let source = DirectiveSource::from_config(&EdgesConfig::default());

        for file in source.files() {
            assert_eq!(file.file_name().and_then(|n| n.to_str()), Some("hedge.conf"));
        }
    }

    #[test]
    fn test_missing_file_is_an_issue() {
        let source =
            DirectiveSource::new(vec![PathBuf::from("/nonexistent/hedge.conf")], Vec::new());
        let (values, issues) = collect(&source);

        assert!(values.is_empty());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, 0);
    }

    #[test]
    fn test_inline_directive_issue() {
        let source = DirectiveSource::new(Vec::new(), vec!["DP-1,top".to_string()]);
        let (_, issues) = collect(&source);

        assert_eq!(
            issues[0].to_string(),
            "edges.directives:1: hotedge: config has too few arguments (expected 7, got 2)"
        );
    }
}
