use crate::analysis::{AnalysisReport, SampleSize, label_to_color};
use crate::core::constants::{LICENSE_TEXT, sampling, server, text};
use crate::core::error::SentinelError;
use crate::core::types::Emotion;
use crate::reporting::escape_html;
use crate::reporting::logging;
use crate::reporting::palette::ColorScale;
use crate::reporting::wordcloud::WordCloud;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Constants for dashboard styling and layout
mod dashboard_constants {
    /// Chart.js CDN URL for rendering charts
    pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js";

    /// Background of the project banner
    pub const BANNER_COLOR: &str = "#007BFF";
}

/// The three pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    ProjectInfo,
    Analysis,
    License,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::ProjectInfo, Section::Analysis, Section::License];

    /// URL and CLI identifiers, in sidebar order
    pub const SLUGS: [&'static str; 3] = ["info", "analisis", "license"];

    /// Name shown in the sidebar selector
    pub fn title(self) -> &'static str {
        match self {
            Section::ProjectInfo => "Informacion del Proyecto",
            Section::Analysis => "Analisis",
            Section::License => "License",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Section::ProjectInfo => Self::SLUGS[0],
            Section::Analysis => Self::SLUGS[1],
            Section::License => Self::SLUGS[2],
        }
    }

    /// Accepts a slug or the displayed title
    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.slug() == value || section.title() == value)
    }
}

/// Everything needed to render one dashboard page
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Page selected in the sidebar
    pub section: Section,
    /// Views of the render pass; only the Analysis page reads it
    pub report: Option<AnalysisReport>,
    /// Current slider position
    pub sample_size: SampleSize,
    /// Render the sidebar and slider as forms that submit back to the server
    pub interactive: bool,
    /// Timestamp when the page was generated
    pub timestamp: String,
}

/// Error type for dashboard generation
#[derive(Debug)]
pub enum DashboardError {
    FileWrite(io::Error),
    Serialization(serde_json::Error),
    MissingReport,
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::FileWrite(e) => write!(f, "Failed to write dashboard file: {}", e),
            DashboardError::Serialization(e) => write!(f, "Failed to serialize data: {}", e),
            DashboardError::MissingReport => {
                write!(f, "Analysis section requested without computed views")
            }
        }
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashboardError::FileWrite(e) => Some(e),
            DashboardError::Serialization(e) => Some(e),
            DashboardError::MissingReport => None,
        }
    }
}

impl From<io::Error> for DashboardError {
    fn from(e: io::Error) -> Self {
        DashboardError::FileWrite(e)
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Serialization(e)
    }
}

impl From<DashboardError> for SentinelError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::FileWrite(err) => SentinelError::Io(err),
            DashboardError::Serialization(err) => SentinelError::Serialization(err),
            DashboardError::MissingReport => SentinelError::InvalidArgument(e.to_string()),
        }
    }
}

/// Client-side chart description consumed by the embedded script
#[derive(Debug, Clone, Serialize)]
struct ChartDescriptor {
    id: &'static str,
    kind: &'static str,
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    labels: Vec<String>,
    values: Vec<u64>,
    colors: Vec<String>,
}

/// HTML dashboard generator for sentiment analysis results
pub struct HtmlDashboard;

impl HtmlDashboard {
    /// Generate and write an HTML dashboard to the specified path
    pub fn generate_dashboard<P: AsRef<Path>>(
        data: &DashboardData,
        output_path: P,
    ) -> Result<usize, DashboardError> {
        let html_content = Self::generate_html_content(data)?;
        fs::write(output_path, &html_content)?;
        Ok(html_content.len())
    }

    /// Generate the complete HTML document content
    pub fn generate_html_content(data: &DashboardData) -> Result<String, DashboardError> {
        let css_styles = Self::generate_css();
        let sidebar = Self::generate_sidebar(data);
        let (main_content, charts) = match data.section {
            Section::ProjectInfo => (Self::generate_project_info(), Vec::new()),
            Section::Analysis => {
                let report = data.report.as_ref().ok_or(DashboardError::MissingReport)?;
                (
                    Self::generate_analysis(report, data),
                    Self::chart_descriptors(report),
                )
            }
            Section::License => (Self::generate_license(), Vec::new()),
        };
        let chart_data_json = Self::script_safe_json(&charts)?;

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{project} - {section}</title>
    <script src="{cdn}"></script>
    <style>{css}</style>
</head>
<body>
    <div class="layout">
        {sidebar}
        <main class="container">
            {main}
            <footer class="footer">Generado {timestamp}</footer>
        </main>
    </div>
    <script>window.dashboardCharts = {charts};</script>
    <script>{js}</script>
</body>
</html>"#,
            project = text::PROJECT_NAME,
            section = data.section.title(),
            cdn = dashboard_constants::CHART_JS_CDN,
            css = css_styles,
            sidebar = sidebar,
            main = main_content,
            timestamp = escape_html(&data.timestamp),
            charts = chart_data_json,
            js = Self::generate_javascript(),
        ))
    }

    fn generate_css() -> &'static str {
        r#"
        :root {
            --primary-color: #007BFF;
            --success-color: #059669;
            --warning-color: #d97706;
            --bg-color: #f8fafc;
            --sidebar-bg: #f0f2f6;
            --card-bg: #ffffff;
            --border-color: #e2e8f0;
            --text-primary: #1e293b;
            --text-secondary: #64748b;
        }

        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background-color: var(--bg-color);
            color: var(--text-primary);
            line-height: 1.6;
        }

        .layout { display: flex; min-height: 100vh; }

        .sidebar {
            width: 280px;
            flex-shrink: 0;
            background: var(--sidebar-bg);
            padding: 2rem 1.5rem;
            border-right: 1px solid var(--border-color);
        }

        .sidebar h2 { font-size: 1.4rem; margin-bottom: 1rem; }
        .sidebar label { display: block; color: var(--text-secondary); margin-bottom: 0.5rem; }
        .sidebar select { width: 100%; padding: 0.5rem; border-radius: 8px; border: 1px solid var(--border-color); }
        .sidebar ul { list-style: none; }
        .sidebar li { padding: 0.4rem 0.75rem; border-radius: 8px; }
        .sidebar li.active { background: var(--primary-color); color: white; }

        .container {
            flex: 1;
            max-width: 1100px;
            margin: 0 auto;
            padding: 2rem;
        }

        .banner {
            background-color: var(--primary-color);
            padding: 20px;
            border-radius: 10px;
            margin-bottom: 2rem;
        }

        .banner h1 { color: white; text-align: center; }

        h1 { font-size: 2rem; margin: 1.5rem 0 1rem; }
        h2 { font-size: 1.5rem; margin: 2rem 0 0.75rem; }
        p { margin-bottom: 0.75rem; }

        .chart-container {
            background: var(--card-bg);
            padding: 2rem;
            border-radius: 12px;
            border: 1px solid var(--border-color);
            margin-bottom: 2rem;
            box-shadow: 0 2px 4px -1px rgba(0, 0, 0, 0.06);
        }

        .chart-title {
            font-size: 1.1rem;
            font-weight: 600;
            margin-bottom: 1rem;
        }

        .wordcloud { width: 100%; height: auto; }

        .empty-note { color: var(--text-secondary); font-style: italic; }

        .slider-form { margin-bottom: 1rem; }
        .slider-form input[type=range] { width: 100%; }

        table.sample {
            width: 100%;
            border-collapse: collapse;
            font-size: 0.85rem;
            background: var(--card-bg);
        }

        table.sample th, table.sample td {
            border: 1px solid var(--border-color);
            padding: 0.35rem 0.5rem;
            text-align: left;
        }

        table.sample th { background: var(--bg-color); }

        .alert {
            padding: 1rem 1.25rem;
            border-radius: 8px;
            margin-bottom: 1.5rem;
        }

        .success { color: var(--success-color); background-color: #ecfdf5; }
        .warning { color: var(--warning-color); background-color: #fffbeb; }

        hr { border: none; border-top: 1px solid var(--border-color); margin: 2rem 0; }

        pre.license {
            background: var(--card-bg);
            border: 1px solid var(--border-color);
            border-radius: 8px;
            padding: 1.5rem;
            white-space: pre-wrap;
            font-size: 0.9rem;
        }

        .footer {
            margin-top: 3rem;
            color: var(--text-secondary);
            font-size: 0.8rem;
            text-align: center;
        }
        "#
    }

    /// Sidebar with the section selector
    fn generate_sidebar(data: &DashboardData) -> String {
        let navigation = if data.interactive {
            let options = Section::ALL
                .iter()
                .map(|section| {
                    format!(
                        r#"<option value="{}"{}>{}</option>"#,
                        section.slug(),
                        if *section == data.section {
                            " selected"
                        } else {
                            ""
                        },
                        section.title()
                    )
                })
                .collect::<Vec<_>>()
                .join("");

            format!(
                r#"
                <form method="get" action="/">
                    <label for="section">{prompt}</label>
                    <select id="section" name="{param}" onchange="this.form.submit()">{options}</select>
                    <input type="hidden" name="{samples_param}" value="{samples}">
                    <noscript><button type="submit">Ir</button></noscript>
                </form>
                "#,
                prompt = text::SECTION_PROMPT,
                param = server::SECTION_PARAM,
                options = options,
                samples_param = server::SAMPLES_PARAM,
                samples = data.sample_size.get(),
            )
        } else {
            let items = Section::ALL
                .iter()
                .map(|section| {
                    format!(
                        r#"<li{}>{}</li>"#,
                        if *section == data.section {
                            r#" class="active""#
                        } else {
                            ""
                        },
                        section.title()
                    )
                })
                .collect::<Vec<_>>()
                .join("");
            format!(r#"<p>{}</p><ul>{}</ul>"#, text::SECTION_PROMPT, items)
        };

        format!(
            r#"
        <nav class="sidebar">
            <h2>{}</h2>
            {}
        </nav>
            "#,
            text::SIDEBAR_TITLE,
            navigation
        )
    }

    fn generate_project_info() -> String {
        let contents = [
            "Sección 1: Conteo de emociones",
            "Sección 2: Nube de palabras con keywords",
            "Sección 3: Relación entre sentimientos positivos y negativos",
            "Sección 4: Gráfico de barras de palabras clave en comentarios negativos",
            "Sección 5: Muestra de ejemplos reales",
            "Sección 6: Conclusión",
        ]
        .iter()
        .map(|line| format!("<p>{line}</p>"))
        .collect::<Vec<_>>()
        .join("\n            ");

        format!(
            r#"
            <div class="banner" style="background-color: {banner};">
                <h1>{project}</h1>
            </div>
            <h1>Aplicación para monitorear las opiniones de los usuarios sobre productos, servicios y temas específicos.</h1>
            <p>Haciendo uso de Procesamiento de Lenguaje Natural (NLP) e Inteligencia Artificial (IA), se analizará la información extraída de Twitter (X.com), la cual será mostrada en las distintas secciones.</p>
            <h1>Contenidos de la sección de análisis:</h1>
            {contents}
            "#,
            banner = dashboard_constants::BANNER_COLOR,
            project = text::PROJECT_NAME,
            contents = contents
        )
    }

    fn generate_analysis(report: &AnalysisReport, data: &DashboardData) -> String {
        format!(
            r#"
            <h1>{title}</h1>
            <p>{intro}</p>
            {emotions}
            {cloud}
            {polarity}
            {keywords}
            {sample}
            {conclusion}
            <hr>
            "#,
            title = text::ANALYSIS_TITLE,
            intro = text::ANALYSIS_INTRO,
            emotions = Self::generate_chart_block(
                "Distribución General de Emociones",
                None,
                "emotionChart"
            ),
            cloud = Self::generate_wordcloud_section(report),
            polarity = Self::generate_chart_block(
                "Comparación de Sentimientos Positivos y Negativos",
                None,
                "sentimentChart"
            ),
            keywords = Self::generate_negative_keywords_section(report),
            sample = Self::generate_sample_section(report, data),
            conclusion = Self::generate_conclusion_section(report),
        )
    }

    fn generate_chart_block(heading: &str, description: Option<&str>, canvas_id: &str) -> String {
        format!(
            r#"
            <h2>{}</h2>
            {}
            <div class="chart-container">
                <canvas id="{}" width="800" height="400"></canvas>
            </div>
            "#,
            heading,
            description
                .map(|d| format!("<p>{d}</p>"))
                .unwrap_or_default(),
            canvas_id
        )
    }

    fn generate_wordcloud_section(report: &AnalysisReport) -> String {
        let cloud = WordCloud::generate(&report.keyword_text);
        let body = if cloud.is_empty() {
            logging::log_warning("No keywords available for the word cloud");
            r#"<p class="empty-note">No hay palabras clave para mostrar.</p>"#.to_string()
        } else {
            cloud.to_svg()
        };

        format!(
            r#"
            <h2>Palabras clave más comunes</h2>
            <p>Visualización de los conceptos más comunes según nuestra IA</p>
            <div class="chart-container">{}</div>
            "#,
            body
        )
    }

    fn generate_negative_keywords_section(report: &AnalysisReport) -> String {
        let block = Self::generate_chart_block(
            "Palabras clave predominantes en comentarios negativos",
            Some("Aquí se muestran las palabras clave que más aparecen en los comentarios que tienen sentimientos negativos."),
            "keywordChart",
        );
        if report.negative_keywords.is_empty() {
            format!(
                r#"{}<p class="empty-note">No hay comentarios negativos con palabras clave.</p>"#,
                block
            )
        } else {
            block
        }
    }

    fn generate_sample_section(report: &AnalysisReport, data: &DashboardData) -> String {
        let control = if data.interactive {
            format!(
                r#"
                <form class="slider-form" method="get" action="/">
                    <input type="hidden" name="{section_param}" value="{section}">
                    <label for="samples">{label} <output id="samples-value">{value}</output></label>
                    <input type="range" id="samples" name="{samples_param}" min="{min}" max="{max}" value="{value}"
                        oninput="document.getElementById('samples-value').value = this.value"
                        onchange="this.form.submit()">
                </form>
                "#,
                section_param = server::SECTION_PARAM,
                section = Section::Analysis.slug(),
                label = text::SLIDER_LABEL,
                samples_param = server::SAMPLES_PARAM,
                min = sampling::MIN_SAMPLE_SIZE,
                max = sampling::MAX_SAMPLE_SIZE,
                value = data.sample_size.get(),
            )
        } else {
            format!(
                r#"<p>{} <strong>{}</strong></p>"#,
                text::SLIDER_LABEL,
                data.sample_size.get()
            )
        };

        format!(
            r#"
            <h2>Ejemplos Reales Analizados</h2>
            <p>Aquí puedes ver algunas palabras clave y los sentimientos que se detectaron en ellas:</p>
            {}
            {}
            "#,
            control,
            Self::generate_sample_table(report)
        )
    }

    fn generate_sample_table(report: &AnalysisReport) -> String {
        let header = std::iter::once("predicted_keyword")
            .chain(Emotion::ALL.iter().map(|emotion| emotion.column()))
            .map(|column| format!("<th>{column}</th>"))
            .collect::<String>();

        let rows = report
            .sample
            .iter()
            .map(|row| {
                let cells = row
                    .emotions
                    .iter()
                    .map(|(_, label)| {
                        format!(
                            r#"<td style="background-color: {}">{}</td>"#,
                            label_to_color(*label),
                            label
                        )
                    })
                    .collect::<String>();
                format!(
                    "<tr><td>{}</td>{}</tr>",
                    escape_html(&row.predicted_keyword),
                    cells
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<div class="chart-container"><table class="sample"><thead><tr>{}</tr></thead><tbody>{}</tbody></table></div>"#,
            header, rows
        )
    }

    fn generate_conclusion_section(report: &AnalysisReport) -> String {
        let style_class = if report.conclusion.is_positive() {
            "success"
        } else {
            "warning"
        };

        format!(
            r#"
            <h2>Conclusiones</h2>
            <div class="alert {}">{}</div>
            "#,
            style_class,
            report.conclusion.message()
        )
    }

    fn generate_license() -> String {
        format!(
            r#"
            <h2>Licencia</h2>
            <pre class="license">{}</pre>
            "#,
            escape_html(LICENSE_TEXT)
        )
    }

    /// Chart descriptions for the Analysis page
    fn chart_descriptors(report: &AnalysisReport) -> Vec<ChartDescriptor> {
        let emotion_values: Vec<usize> = report.emotions.iter().map(|c| c.count).collect();
        let keyword_values: Vec<usize> = report.negative_keywords.iter().map(|k| k.count).collect();

        vec![
            ChartDescriptor {
                id: "emotionChart",
                kind: "bar",
                title: "Cantidad de Mensajes por Emoción",
                x_label: "Emoción",
                y_label: "Cantidad",
                labels: report
                    .emotions
                    .iter()
                    .map(|c| c.emotion.column().to_string())
                    .collect(),
                values: emotion_values.iter().map(|&v| v as u64).collect(),
                colors: ColorScale::Viridis.map_values(&emotion_values),
            },
            ChartDescriptor {
                id: "sentimentChart",
                kind: "pie",
                title: "Proporción de Sentimientos Positivos vs Negativos",
                x_label: "Tipo",
                y_label: "Cantidad",
                labels: vec![
                    text::POSITIVE_LABEL.to_string(),
                    text::NEGATIVE_LABEL.to_string(),
                ],
                values: vec![report.polarity.positive, report.polarity.negative],
                colors: ColorScale::RdBu.discrete(2),
            },
            ChartDescriptor {
                id: "keywordChart",
                kind: "bar",
                title: "Palabras Clave Más Frecuentes en Comentarios Negativos",
                x_label: "Palabra Clave",
                y_label: "Apariciones",
                labels: report
                    .negative_keywords
                    .iter()
                    .map(|k| k.keyword.clone())
                    .collect(),
                values: keyword_values.iter().map(|&v| v as u64).collect(),
                colors: ColorScale::Blues.map_values(&keyword_values),
            },
        ]
    }

    /// Serialize for embedding inside a `<script>` element
    fn script_safe_json<T: Serialize>(value: &T) -> Result<String, DashboardError> {
        Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
    }

    fn generate_javascript() -> &'static str {
        r#"
        document.addEventListener('DOMContentLoaded', function() {
            if (typeof Chart === 'undefined' || !window.dashboardCharts) {
                return;
            }
            window.dashboardCharts.forEach(function(chart) {
                const ctx = document.getElementById(chart.id);
                if (!ctx) {
                    return;
                }
                const isPie = chart.kind === 'pie';
                new Chart(ctx, {
                    type: chart.kind,
                    data: {
                        labels: chart.labels,
                        datasets: [{
                            label: chart.y_label,
                            data: chart.values,
                            backgroundColor: chart.colors,
                            borderWidth: isPie ? 2 : 0,
                            borderColor: '#ffffff'
                        }]
                    },
                    options: {
                        responsive: true,
                        plugins: {
                            title: { display: true, text: chart.title },
                            legend: { display: isPie, position: 'bottom' }
                        },
                        scales: isPie ? {} : {
                            x: { title: { display: true, text: chart.x_label } },
                            y: { title: { display: true, text: chart.y_label }, beginAtZero: true }
                        }
                    }
                });
            });
        });
        "#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Conclusion;
    use crate::core::types::MessageRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::error::Error;
    use tempfile::NamedTempFile;

    fn create_test_report() -> AnalysisReport {
        let mut records = Vec::new();
        for i in 0..12 {
            let detected: &[Emotion] = match i % 3 {
                0 => &[Emotion::Joy, Emotion::Trust],
                1 => &[Emotion::Anger, Emotion::Fear],
                _ => &[Emotion::Surprise],
            };
            let keyword = if i % 4 == 3 {
                None
            } else {
                Some(["precio", "servicio", "retraso"][i % 3])
            };
            records.push(MessageRecord::with_emotions(keyword, detected));
        }
        let mut rng = StdRng::seed_from_u64(5);
        AnalysisReport::build(&records, SampleSize::new(5).unwrap(), 10, &mut rng)
    }

    fn create_test_dashboard_data(section: Section, interactive: bool) -> DashboardData {
        DashboardData {
            section,
            report: Some(create_test_report()),
            sample_size: SampleSize::new(5).unwrap(),
            interactive,
            timestamp: "2025-01-01 12:00:00 UTC".to_string(),
        }
    }

    #[test]
    fn test_section_slugs_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_slug(section.slug()), Some(section));
            assert_eq!(Section::from_slug(section.title()), Some(section));
        }
        assert_eq!(Section::from_slug("nope"), None);
        assert_eq!(Section::default(), Section::ProjectInfo);
    }

    #[test]
    fn test_section_titles() {
        let titles: Vec<_> = Section::ALL.iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["Informacion del Proyecto", "Analisis", "License"]);
    }

    #[test]
    fn test_project_info_page() {
        let data = create_test_dashboard_data(Section::ProjectInfo, false);
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Proyecto V-Sentinel"));
        assert!(html.contains("#007BFF"));
        assert!(html.contains("Sección 6: Conclusión"));
        assert!(html.contains("window.dashboardCharts = [];"));
    }

    #[test]
    fn test_license_page_is_verbatim() {
        let data = create_test_dashboard_data(Section::License, false);
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        assert!(html.contains("<h2>Licencia</h2>"));
        assert!(html.contains("Copyright (c) 2025 DaniTM06"));
        assert!(html.contains("THE SOFTWARE IS PROVIDED &quot;AS IS&quot;"));
    }

    #[test]
    fn test_analysis_page_contains_all_views() {
        let data = create_test_dashboard_data(Section::Analysis, false);
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        assert!(html.contains("Análisis Visual del Sentimiento"));
        assert!(html.contains(r#"id="emotionChart""#));
        assert!(html.contains("<svg"));
        assert!(html.contains(r#"id="sentimentChart""#));
        assert!(html.contains(r#"id="keywordChart""#));
        assert!(html.contains("Ejemplos Reales Analizados"));
        assert!(html.contains("Conclusiones"));
        assert!(html.contains("<hr>"));
    }

    #[test]
    fn test_analysis_sections_in_fixed_order() {
        let data = create_test_dashboard_data(Section::Analysis, false);
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        let positions: Vec<usize> = [
            "emotionChart",
            "Palabras clave más comunes",
            "sentimentChart",
            "keywordChart",
            "Ejemplos Reales Analizados",
            "Conclusiones",
        ]
        .iter()
        .map(|needle| html.find(needle).expect(needle))
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_analysis_without_report_fails() {
        let mut data = create_test_dashboard_data(Section::Analysis, false);
        data.report = None;
        let err = HtmlDashboard::generate_html_content(&data).unwrap_err();
        assert!(matches!(err, DashboardError::MissingReport));
    }

    #[test]
    fn test_sample_table_cells_are_colored() {
        let report = create_test_report();
        let table = HtmlDashboard::generate_sample_table(&report);

        assert_eq!(table.matches("<tr><td>").count(), 5);
        assert!(table.contains(r#"<td style="background-color: lightgreen">Yes</td>"#));
        assert!(table.contains(r#"<td style="background-color: lightcoral">No</td>"#));
    }

    #[test]
    fn test_conclusion_styles() {
        let mut report = create_test_report();
        report.conclusion = Conclusion::Positive;
        let positive = HtmlDashboard::generate_conclusion_section(&report);
        assert!(positive.contains("alert success"));
        assert!(positive.contains("Predominan los sentimientos positivos"));

        report.conclusion = Conclusion::Negative;
        let negative = HtmlDashboard::generate_conclusion_section(&report);
        assert!(negative.contains("alert warning"));
        assert!(negative.contains("Predominan los sentimientos negativos"));
    }

    #[test]
    fn test_chart_descriptors() {
        let report = create_test_report();
        let charts = HtmlDashboard::chart_descriptors(&report);

        assert_eq!(charts.len(), 3);
        assert_eq!(charts[0].labels.len(), Emotion::COUNT);
        assert_eq!(charts[0].colors.len(), Emotion::COUNT);
        assert_eq!(charts[1].kind, "pie");
        assert_eq!(charts[1].labels, vec!["Positivos", "Negativos"]);
        assert_eq!(
            charts[1].values,
            vec![report.polarity.positive, report.polarity.negative]
        );
        assert_eq!(charts[2].labels.len(), report.negative_keywords.len());
    }

    #[test]
    fn test_empty_negative_keywords_note() {
        let mut report = create_test_report();
        report.negative_keywords.clear();
        let section = HtmlDashboard::generate_negative_keywords_section(&report);
        assert!(section.contains("empty-note"));
    }

    #[test]
    fn test_empty_wordcloud_note() {
        let mut report = create_test_report();
        report.keyword_text.clear();
        let section = HtmlDashboard::generate_wordcloud_section(&report);
        assert!(section.contains("empty-note"));
        assert!(!section.contains("<svg"));
    }

    #[test]
    fn test_interactive_sidebar_and_slider() {
        let data = create_test_dashboard_data(Section::Analysis, true);
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        assert!(html.contains(r#"<option value="analisis" selected>Analisis</option>"#));
        assert!(html.contains(r#"type="range""#));
        assert!(html.contains(r#"min="5" max="50" value="5""#));
    }

    #[test]
    fn test_static_sidebar_has_no_forms() {
        let data = create_test_dashboard_data(Section::Analysis, false);
        let html = HtmlDashboard::generate_html_content(&data).unwrap();

        assert!(!html.contains("<form"));
        assert!(html.contains(r#"<li class="active">Analisis</li>"#));
    }

    #[test]
    fn test_script_safe_json() {
        let json = HtmlDashboard::script_safe_json(&vec!["</script><b>"]).unwrap();
        assert!(!json.contains("</script>"));
        assert!(json.contains(r"<\/script>"));
    }

    #[test]
    fn test_keyword_markup_is_escaped() {
        let records = vec![MessageRecord::with_emotions(
            Some("<img src=x>"),
            &[Emotion::Anger],
        )];
        let mut rng = StdRng::seed_from_u64(0);
        let report = AnalysisReport::build(&records, SampleSize::default(), 10, &mut rng);
        let table = HtmlDashboard::generate_sample_table(&report);
        assert!(table.contains("&lt;img src=x&gt;"));
        assert!(!table.contains("<img"));
    }

    #[test]
    fn test_generate_dashboard_file_creation() -> Result<(), Box<dyn std::error::Error>> {
        let data = create_test_dashboard_data(Section::Analysis, false);
        let temp_file = NamedTempFile::new()?;

        let bytes = HtmlDashboard::generate_dashboard(&data, temp_file.path())?;

        let content = fs::read_to_string(temp_file.path())?;
        assert_eq!(bytes, content.len());
        assert!(content.contains("<!DOCTYPE html>"));
        Ok(())
    }

    #[test]
    fn test_dashboard_error_display_and_source() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let file_error = DashboardError::FileWrite(io_error);
        assert!(file_error.to_string().contains("Failed to write dashboard file"));
        assert!(file_error.source().is_some());

        let missing = DashboardError::MissingReport;
        assert!(missing.source().is_none());
    }

    #[test]
    fn test_dashboard_error_into_sentinel_error() {
        let io_error = io::Error::new(io::ErrorKind::Other, "disk full");
        let converted: SentinelError = DashboardError::from(io_error).into();
        assert!(matches!(converted, SentinelError::Io(_)));
    }
}
