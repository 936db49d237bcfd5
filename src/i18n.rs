use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const DIAGRAM_WRITTEN: &str = "general.diagram_written";
    pub const CONFIG_WRITTEN: &str = "general.config_written";
    pub const SUMMARY_HEADING: &str = "general.summary_heading";

    pub const CHART_TITLE: &str = "chart.title";
    pub const AXIS_X: &str = "chart.axis_x";
    pub const AXIS_Y: &str = "chart.axis_y";

    pub const SERIES_SATURATION: &str = "series.saturation";
    pub const SERIES_NPSH: &str = "series.npsh";
    pub const SERIES_RRA_MIN: &str = "series.rra_min";
    pub const SERIES_RRA_MAX: &str = "series.rra_max";
    pub const SERIES_ANGV_MAX: &str = "series.angv_max";
    pub const SERIES_ANGV_MIN: &str = "series.angv_min";
    pub const SERIES_RP: &str = "series.rp";

    pub const LINE_RRA_START: &str = "line.rra_start";
    pub const LINE_ANGV_START: &str = "line.angv_start";
    pub const LINE_ANGV_END: &str = "line.angv_end";

    pub const RECT_API: &str = "rect.api_domain";
    pub const RECT_CONNECTION: &str = "rect.connection_zone";

    pub const LABEL_RRA: &str = "label.rra";
    pub const LABEL_ANGV: &str = "label.angv";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Fr,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::Fr
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 내장 문자열만 사용한다. 알 수 없는 코드는 fr로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 내장 문자열 위에 `<pack_dir>/<lang>.toml`이 있으면 덮어쓴다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: pack_dir.and_then(|dir| load_overrides(dir, lang_code)),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 프랑스어 문자열로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| fr(key)),
            Language::Fr => fr(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "fr".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("fr") => Some("fr".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "fr" => Some("fr".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 언어팩 `<dir>/<lang>.toml`을 로드한다. 중첩 테이블은 점으로 이은 키가 된다.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(dir.join(format!("{lang}.toml"))).ok()?;
    parse_toml_to_map(&content)
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    walk(&format!("{prefix}.{k}"), v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn fr(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erreur",
        DIAGRAM_WRITTEN => "Diagramme écrit :",
        CONFIG_WRITTEN => "Configuration écrite :",
        SUMMARY_HEADING => "Courbe / pression min / pression max (bar abs.)",
        CHART_TITLE => "Diagramme Pression, température",
        AXIS_X => "température (°C)",
        AXIS_Y => "Pression (bar abs.)",
        SERIES_SATURATION => "Courbe de saturation",
        SERIES_NPSH => "NPSH approximation",
        SERIES_RRA_MIN => "limite inf AN/RRA",
        SERIES_RRA_MAX => "limite sup AN/RRA",
        SERIES_ANGV_MAX => "limite sup AN/GV",
        SERIES_ANGV_MIN => "limite inf AN/GV",
        SERIES_RP => "RP",
        LINE_RRA_START => "limite inf temp AN/RRA",
        LINE_ANGV_START => "limite inf temp AN/GV",
        LINE_ANGV_END => "limite sup temp AN/GV",
        RECT_API => "domaine API",
        RECT_CONNECTION => "connexion AN/GV - RRA",
        LABEL_RRA => "AN/RRA",
        LABEL_ANGV => "AN/GV",
        _ => "[traduction manquante]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        DIAGRAM_WRITTEN => "Diagram written:",
        CONFIG_WRITTEN => "Config written:",
        SUMMARY_HEADING => "Curve / min pressure / max pressure (bar abs.)",
        CHART_TITLE => "Pressure-temperature diagram",
        AXIS_X => "temperature (°C)",
        AXIS_Y => "Pressure (bar abs.)",
        SERIES_SATURATION => "Saturation curve",
        SERIES_NPSH => "NPSH approximation",
        SERIES_RRA_MIN => "AN/RRA lower limit",
        SERIES_RRA_MAX => "AN/RRA upper limit",
        SERIES_ANGV_MAX => "AN/GV upper limit",
        SERIES_ANGV_MIN => "AN/GV lower limit",
        SERIES_RP => "RP",
        LINE_RRA_START => "AN/RRA low temperature limit",
        LINE_ANGV_START => "AN/GV low temperature limit",
        LINE_ANGV_END => "AN/GV high temperature limit",
        RECT_API => "API domain",
        RECT_CONNECTION => "AN/GV - RRA connection",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[chart]\ntitle = \"T\"\n[series]\nrp = \"R\"\n")
            .expect("map");
        assert_eq!(map.get("chart.title").map(String::as_str), Some("T"));
        assert_eq!(map.get("series.rp").map(String::as_str), Some("R"));
    }

    #[test]
    fn explicit_language_wins() {
        assert_eq!(resolve_language("en-GB", Some("fr")), "en");
        assert_eq!(resolve_language("auto", Some("fr_FR")), "fr");
    }

    #[test]
    fn pack_file_overrides_builtin_strings() {
        let dir = std::env::temp_dir().join(format!("socks_pack_{}", std::process::id()));
        fs::create_dir_all(&dir).expect("mkdir");
        fs::write(dir.join("fr.toml"), "[chart]\ntitle = \"Diagramme P-T\"\n").expect("write");

        let tr = Translator::new_with_pack("fr", Some(&dir));
        assert_eq!(tr.t(keys::CHART_TITLE), "Diagramme P-T");
        assert_eq!(tr.t(keys::LABEL_RRA), "AN/RRA");

        let en = Translator::new_with_pack("en", Some(&dir));
        assert_eq!(en.t(keys::CHART_TITLE), "Pressure-temperature diagram");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn english_falls_back_to_french_for_band_names() {
        let tr = Translator::new("en-US");
        assert_eq!(tr.language(), Language::En);
        assert_eq!(tr.t(keys::LABEL_ANGV), "AN/GV");
        assert_eq!(tr.t(keys::CHART_TITLE), "Pressure-temperature diagram");
    }
}
