/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal strings, numbers and labels used by the
/// loader, the views and the renderers.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful, sectioned report
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain `key value` lines without colors
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Dataset schema constants
pub mod dataset {
    /// Relative path of the dataset when none is configured
    pub const DEFAULT_PATH: &str = "fine_tuning.csv";
    /// Column holding the keyword predicted for each message
    pub const KEYWORD_COLUMN: &str = "predicted_keyword";
    /// Accepted spellings of a true emotion indicator
    pub const TRUE_VALUES: [&str; 5] = ["1", "1.0", "true", "True", "TRUE"];
    /// Accepted spellings of a false emotion indicator
    pub const FALSE_VALUES: [&str; 5] = ["0", "0.0", "false", "False", "FALSE"];
}

/// Sample inspector bounds
pub mod sampling {
    /// Smallest sample the slider allows
    pub const MIN_SAMPLE_SIZE: usize = 5;
    /// Largest sample the slider allows
    pub const MAX_SAMPLE_SIZE: usize = 50;
    /// Slider starting position
    pub const DEFAULT_SAMPLE_SIZE: usize = 10;
}

/// Keyword aggregation constants
pub mod keywords {
    /// Bars shown in the negative keyword chart
    pub const DEFAULT_TOP_KEYWORDS: usize = 10;
    /// Upper bound accepted for `top_keywords`
    pub const MAX_TOP_KEYWORDS: usize = 100;
}

/// Word cloud canvas constants
pub mod wordcloud {
    pub const WIDTH: u32 = 800;
    pub const HEIGHT: u32 = 400;
    /// Most frequent words kept in the cloud
    pub const MAX_WORDS: usize = 200;
    pub const MIN_FONT_SIZE: f64 = 10.0;
    pub const MAX_FONT_SIZE: f64 = 96.0;
    pub const BACKGROUND: &str = "white";
}

/// HTTP server constants
pub mod server {
    /// Default listen address for `vsentinel serve`
    pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8501";
    /// Query parameter selecting the section
    pub const SECTION_PARAM: &str = "section";
    /// Query parameter carrying the slider value
    pub const SAMPLES_PARAM: &str = "samples";
}

/// Dashboard file constants
pub mod files {
    /// Default output path for `vsentinel dashboard`
    pub const DEFAULT_DASHBOARD_PATH: &str = "dashboard.html";
    /// Config file searched in the working directory and its parents
    pub const CONFIG_FILE_NAME: &str = ".vsentinel.toml";
    /// Parent directories searched for the config file
    pub const CONFIG_SEARCH_DEPTH: usize = 3;
}

/// User-facing page text
pub mod text {
    pub const PROJECT_NAME: &str = "Proyecto V-Sentinel";
    pub const SIDEBAR_TITLE: &str = "Menú de Navegación";
    pub const SECTION_PROMPT: &str = "Selecciona una sección:";
    pub const ANALYSIS_TITLE: &str = "Análisis Visual del Sentimiento";
    pub const ANALYSIS_INTRO: &str = "En este apartado se podrá descubrir <strong>cómo se sienten los usuarios en base a los mensajes analizados en redes sociales</strong>.";
    pub const SLIDER_LABEL: &str = "Número de ejemplos a mostrar:";
    pub const POSITIVE_CONCLUSION: &str = "Predominan los sentimientos positivos. Los usuarios se muestran optimistas y confiados.";
    pub const NEGATIVE_CONCLUSION: &str = "Predominan los sentimientos negativos. Hay una tendencia hacia emociones como miedo o enojo.";
    pub const POSITIVE_LABEL: &str = "Positivos";
    pub const NEGATIVE_LABEL: &str = "Negativos";
    pub const YES: &str = "Yes";
    pub const NO: &str = "No";
}

/// Verbatim license text shown in the License section
pub const LICENSE_TEXT: &str = r#"MIT License

Copyright (c) 2025 DaniTM06

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_sampling_bounds() {
        assert_eq!(sampling::MIN_SAMPLE_SIZE, 5);
        assert_eq!(sampling::MAX_SAMPLE_SIZE, 50);
        assert!(
            (sampling::MIN_SAMPLE_SIZE..=sampling::MAX_SAMPLE_SIZE)
                .contains(&sampling::DEFAULT_SAMPLE_SIZE)
        );
    }

    #[test]
    fn test_boolean_spellings_are_disjoint() {
        for value in dataset::TRUE_VALUES {
            assert!(!dataset::FALSE_VALUES.contains(&value));
        }
    }

    #[test]
    fn test_wordcloud_canvas() {
        assert_eq!(wordcloud::WIDTH, 800);
        assert_eq!(wordcloud::HEIGHT, 400);
        assert!(wordcloud::MIN_FONT_SIZE < wordcloud::MAX_FONT_SIZE);
    }

    #[test]
    fn test_license_text_is_mit() {
        assert!(LICENSE_TEXT.starts_with("MIT License"));
        assert!(LICENSE_TEXT.ends_with("SOFTWARE."));
    }
}
