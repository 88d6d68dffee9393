use super::{EdgeDefinition, Side};
use thiserror::Error;

/// Ключевое слово директивы в конфиге хоста
pub const HOTEDGE_KEYWORD: &str = "hotedge";

/// Число полей директивы:
/// monitor, side, activateZoneSize, deactivateZoneSize,
/// activateCommand, deactivateCommand, dodgeWindow
const FIELD_COUNT: usize = 7;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("hotedge: config did not specify a valid side (got '{0}')")]
    InvalidSide(String),

    #[error(
        "hotedge: config has too {} arguments (expected {expected}, got {found})",
        few_or_many(.found, .expected)
    )]
    FieldCount { expected: usize, found: usize },

    #[error("hotedge: {field} must be an integer (got '{value}')")]
    InvalidNumber { field: &'static str, value: String },
}

/// Разобрать значение директивы `hotedge` в описание края.
///
/// Поля разделены запятыми и идут в фиксированном порядке, пробелы по краям
/// поля отбрасываются. Команды не могут содержать запятых.
pub fn parse_directive(value: &str) -> Result<EdgeDefinition, DirectiveError> {
    let mut monitor_name = String::new();
    let mut side = Side::Top;
    let mut activate_zone_size = 0;
    let mut deactivate_zone_size = 0;
    let mut activate_command = String::new();
    let mut deactivate_command = String::new();
    let mut dodge_window = false;

    let mut found = 0;
    for (index, field) in split_fields(value).into_iter().enumerate() {
        found = index + 1;
        match index {
            0 => monitor_name = field.to_string(),
            // Неверная сторона отбрасывает директиву сразу, до проверки числа полей
            1 => side = field.parse()?,
            2 => activate_zone_size = parse_int("activateZoneSize", field)?,
            3 => deactivate_zone_size = parse_int("deactivateZoneSize", field)?,
            4 => activate_command = field.to_string(),
            5 => deactivate_command = field.to_string(),
            6 => dodge_window = parse_int("dodgeWindow", field)? != 0,
            _ => {}
        }
    }

    if found != FIELD_COUNT {
        return Err(DirectiveError::FieldCount {
            expected: FIELD_COUNT,
            found,
        });
    }

    Ok(EdgeDefinition {
        monitor_name,
        side,
        activate_zone_size,
        deactivate_zone_size,
        activate_command,
        deactivate_command,
        dodge_window,
    })
}

/// Одна запятая в конце не даёт пустого восьмого поля, пустая строка не даёт полей
fn split_fields(value: &str) -> Vec<&str> {
    if value.is_empty() {
        return Vec::new();
    }

    value
        .strip_suffix(',')
        .unwrap_or(value)
        .split(',')
        .map(str::trim)
        .collect()
}

fn few_or_many(found: &usize, expected: &usize) -> &'static str {
    if found < expected {
        "few"
    } else {
        "many"
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i32, DirectiveError> {
    value.parse().map_err(|_| DirectiveError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_directive() {
        let edge = parse_directive("DP-1,top,10,50,eww open bar,eww close bar,0").unwrap();

        assert_eq!(edge.monitor_name, "DP-1");
        assert_eq!(edge.side, Side::Top);
        assert_eq!(edge.activate_zone_size, 10);
        assert_eq!(edge.deactivate_zone_size, 50);
        assert_eq!(edge.activate_command, "eww open bar");
        assert_eq!(edge.deactivate_command, "eww close bar");
        assert!(!edge.dodge_window);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let edge = parse_directive(" HDMI-A-1 , right , 2 , 30 , a , b , 1 ").unwrap();

        assert_eq!(edge.monitor_name, "HDMI-A-1");
        assert_eq!(edge.side, Side::Right);
        assert_eq!(edge.activate_command, "a");
        assert!(edge.dodge_window);
    }

    #[test]
    fn test_any_nonzero_dodge_is_true() {
        assert!(parse_directive("DP-1,left,1,2,a,b,5").unwrap().dodge_window);
    }

    #[test]
    fn test_invalid_side() {
        let err = parse_directive("DP-1,middle,10,50,a,b,0").unwrap_err();
        assert_eq!(err, DirectiveError::InvalidSide("middle".to_string()));
        assert!(err.to_string().starts_with("hotedge: config did not specify a valid side"));
    }

    #[test]
    fn test_invalid_side_wins_over_field_count() {
        let err = parse_directive("DP-1,diagonal").unwrap_err();
        assert!(matches!(err, DirectiveError::InvalidSide(_)));
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_directive("DP-1,top,10,50,a,b").unwrap_err();
        assert_eq!(err, DirectiveError::FieldCount { expected: 7, found: 6 });
        assert!(err.to_string().contains("too few"));
    }

    #[test]
    fn test_too_many_fields() {
        let err = parse_directive("DP-1,top,10,50,a,b,0,extra").unwrap_err();
        assert_eq!(err, DirectiveError::FieldCount { expected: 7, found: 8 });
        assert!(err.to_string().contains("too many"));
    }

    #[test]
    fn test_empty_value() {
        let err = parse_directive("").unwrap_err();
        assert_eq!(err, DirectiveError::FieldCount { expected: 7, found: 0 });
    }

    #[test]
    fn test_single_trailing_comma_is_ignored() {
        let edge = parse_directive("DP-1,top,10,50,a,b,0,").unwrap();
        assert!(!edge.dodge_window);
        assert_eq!(edge.deactivate_command, "b");

        let err = parse_directive("DP-1,top,10,50,a,b,0,,").unwrap_err();
        assert_eq!(err, DirectiveError::FieldCount { expected: 7, found: 8 });
    }

    #[test]
    fn test_non_integer_size() {
        let err = parse_directive("DP-1,top,ten,50,a,b,0").unwrap_err();
        assert_eq!(
            err,
            DirectiveError::InvalidNumber {
                field: "activateZoneSize",
                value: "ten".to_string()
            }
        );
    }
}
