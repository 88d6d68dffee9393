use std::path::{Path, PathBuf};

/// Раскрыть `~` в начале пути в домашний каталог пользователя
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }

    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(path)
}

/// Разрешить путь из директивы `source` относительно файла, который её содержит
pub fn resolve_relative(path: &str, including_file: &Path) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        return expanded;
    }

    match including_file.parent() {
        Some(dir) => dir.join(expanded),
        None => expanded,
    }
}

/// Отдельный файл с директивами `hotedge`. Сам Hyprland его не читает:
/// без загруженного плагина он счёл бы `hotedge` неизвестным ключом.
pub fn default_directive_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hypr").join("hedge.conf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directive_file_is_not_hyprland_conf() {
        if let Some(path) = default_directive_file() {
            assert!(path.ends_with("hypr/hedge.conf"));
        }
    }

    #[test]
    fn absolute_paths_are_kept() {
        let including = Path::new("/home/u/.config/hypr/hyprland.conf");
        let resolved = resolve_relative("/etc/hypr/edges.conf", including);
        assert_eq!(resolved, PathBuf::from("/etc/hypr/edges.conf"));
    }

    #[test]
    fn relative_paths_follow_including_file() {
        let including = Path::new("/home/u/.config/hypr/hyprland.conf");
        let resolved = resolve_relative("edges.conf", including);
        assert_eq!(resolved, PathBuf::from("/home/u/.config/hypr/edges.conf"));
    }

    #[test]
    fn tilde_without_slash_is_literal() {
        assert_eq!(expand_tilde("~edges"), PathBuf::from("~edges"));
    }
}
