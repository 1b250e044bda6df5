//! Static HTML export of a project's landing page.
//!
//! Output is a single self-contained document: Tailwind from the CDN, then a
//! hero, a feature grid and a contact section built from [`PreviewData`].
//! The page is an askama template, so blueprint and project text is escaped
//! on output; custom `html_content`/`css_content`/`js_content` blobs are
//! author markup and pass through `|safe`.

use askama::Template;
use chrono::Datelike;
use thiserror::Error;

use crate::models::{Language, PreviewData, Project, SharedProject};

/// Name used when a title slugifies to nothing.
const FALLBACK_FILENAME: &str = "landing-page.html";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to render landing page: {0}")]
    Render(#[from] askama::Error),
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Fixed page copy per language.
struct Labels {
    font: &'static str,
    get_started: &'static str,
    features: &'static str,
    feature_blurb: &'static str,
    contact_heading: &'static str,
    contact_lede: &'static str,
    contact_button: &'static str,
    rights: &'static str,
    created_with: &'static str,
}

fn labels(language: Language) -> Labels {
    match language {
        Language::Ar => Labels {
            font: "Cairo",
            get_started: "ابدأ الآن",
            features: "المميزات",
            feature_blurb: "وصف الميزة هنا",
            contact_heading: "تواصل معنا",
            contact_lede: "نحن هنا لمساعدتك",
            contact_button: "اتصل بنا",
            rights: "جميع الحقوق محفوظة",
            created_with: "تم الإنشاء بواسطة",
        },
        Language::En => Labels {
            font: "Inter",
            get_started: "Get Started",
            features: "Features",
            feature_blurb: "Feature description here",
            contact_heading: "Contact Us",
            contact_lede: "We are here to help you",
            contact_button: "Contact Us",
            rights: "All rights reserved",
            created_with: "Created with",
        },
    }
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="{{ lang }}" dir="{{ dir }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ preview.title }}</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        body { font-family: {{ labels.font }}, sans-serif; }
    </style>
{%- match description %}{% when Some with (description) %}
    <meta name="description" content="{{ description }}">
{%- when None %}{% endmatch %}
{%- match css_content %}{% when Some with (css) %}
    <style>{{ css|safe }}</style>
{%- when None %}{% endmatch %}
</head>
<body class="bg-gray-50">
{% match html_content %}{% when Some with (custom) %}{{ custom|safe }}{% when None %}    <!-- Hero Section -->
    <section class="py-20 text-white text-center" style="background-color: {{ preview.primary_color }}">
        <div class="container mx-auto px-4">
            <h1 class="text-4xl md:text-6xl font-bold mb-6">{{ preview.title }}</h1>
            <p class="text-xl mb-8 opacity-90">{{ preview.subtitle }}</p>
            <button class="bg-white text-gray-900 px-8 py-3 rounded-lg font-semibold hover:bg-gray-100 transition-colors">
                {{ labels.get_started }}
            </button>
        </div>
    </section>

    <!-- Features Section -->
    <section class="py-20 bg-white">
        <div class="container mx-auto px-4">
            <h2 class="text-3xl font-bold text-center mb-12 text-gray-900">{{ labels.features }}</h2>
            <div class="grid md:grid-cols-3 gap-8">
            {%- for feature in preview.features %}
                <div class="text-center p-6 rounded-lg border">
                    <div class="w-16 h-16 mx-auto mb-4 rounded-full flex items-center justify-center" style="background-color: {{ preview.primary_color }}20">
                        <svg class="w-8 h-8" style="color: {{ preview.primary_color }}" fill="currentColor" viewBox="0 0 20 20">
                            <path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z"/>
                        </svg>
                    </div>
                    <h3 class="text-xl font-semibold mb-2 text-gray-900">{{ feature }}</h3>
                    <p class="text-gray-600">{{ labels.feature_blurb }}</p>
                </div>
            {%- endfor %}
            </div>
        </div>
    </section>

    <!-- Contact Section -->
    <section class="py-20 bg-gray-100">
        <div class="container mx-auto px-4 text-center">
            <h2 class="text-3xl font-bold mb-8 text-gray-900">{{ labels.contact_heading }}</h2>
            <p class="text-xl text-gray-600 mb-8">{{ labels.contact_lede }}</p>
            <button class="px-8 py-3 rounded-lg font-semibold text-white transition-colors" style="background-color: {{ preview.primary_color }}">
                {{ labels.contact_button }}
            </button>
        </div>
    </section>

    <!-- Footer -->
    <footer class="py-8 bg-gray-900 text-white text-center">
        <p>&copy; {{ year }} {{ preview.title }}. {{ labels.rights }}.</p>
        <p class="mt-2 text-sm text-gray-400">{{ labels.created_with }} Chat2Site</p>
    </footer>{% endmatch %}
{%- match js_content %}{% when Some with (js) %}
    <script>{{ js|safe }}</script>
{%- when None %}{% endmatch %}
</body>
</html>
"#,
    ext = "html"
)]
struct LandingPage<'a> {
    lang: &'static str,
    dir: &'static str,
    labels: Labels,
    preview: &'a PreviewData,
    description: Option<&'a str>,
    html_content: Option<&'a str>,
    css_content: Option<&'a str>,
    js_content: Option<&'a str>,
    year: i32,
}

impl<'a> LandingPage<'a> {
    fn new(preview: &'a PreviewData, language: Language, year: i32) -> Self {
        Self {
            lang: language.as_str(),
            dir: if language.is_rtl() { "rtl" } else { "ltr" },
            labels: labels(language),
            preview,
            description: None,
            html_content: None,
            css_content: None,
            js_content: None,
            year,
        }
    }

    fn with_extras(
        mut self,
        description: &'a str,
        html: Option<&'a str>,
        css: Option<&'a str>,
        js: Option<&'a str>,
    ) -> Self {
        self.description = Some(description).filter(|d| !d.trim().is_empty());
        self.html_content = html;
        self.css_content = css;
        self.js_content = js;
        self
    }
}

/// Render a project's landing page. The footer year comes from the
/// project's last update, so the same record always renders the same bytes.
pub fn render_landing_page(project: &Project, language: Language) -> ExportResult<String> {
    let page = LandingPage::new(&project.preview_data, language, project.updated_at.year())
        .with_extras(
            &project.description,
            project.html_content.as_deref(),
            project.css_content.as_deref(),
            project.js_content.as_deref(),
        );
    Ok(page.render()?)
}

/// Render the page behind a share link.
pub fn render_shared_project(shared: &SharedProject, language: Language) -> ExportResult<String> {
    let page = LandingPage::new(&shared.preview_data, language, shared.updated_at.year())
        .with_extras(
            &shared.description,
            shared.html_content.as_deref(),
            shared.css_content.as_deref(),
            shared.js_content.as_deref(),
        );
    Ok(page.render()?)
}

/// Render a bare blueprint (no stored project yet).
pub fn render_preview(preview: &PreviewData, language: Language, year: i32) -> ExportResult<String> {
    Ok(LandingPage::new(preview, language, year).render()?)
}

/// Download file name for a project title: whitespace runs become `-`, the
/// rest is lowercased, and path or quote characters are dropped.
pub fn export_filename(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if matches!(ch, '/' | '\\' | '"' | '\'') || ch.is_control() {
            continue;
        }
        slug.extend(ch.to_lowercase());
    }
    if slug.trim_matches('-').is_empty() {
        return FALLBACK_FILENAME.to_string();
    }
    format!("{slug}.html")
}
