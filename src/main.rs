use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::spawn;

use anyhow::Result;
use clap::Parser;
use eframe::{App, AppCreator, CreationContext, egui};
use eframe::egui::{Button, Context, Grid, RichText, Spinner, TextEdit, Ui, Visuals};
use fuzzy_matcher::skim::SkimMatcherV2;
use itertools::Itertools;

use crate::sigtable::{DEFAULT_PAGE_SIZE, FunctionSignature, FunctionTable, FuzzyMatcher, JsonFile, Matcher, Provider, Sample, SignatureMatcher, TypeName};

mod sigtable;

const PLACEHOLDER: &str = r#"Search, for example: "main", "->number[]", "int, char->string""#;

#[derive(Parser)]
#[command(name = "sigtable")]
#[command(about = "Search a table of function signatures", long_about = None)]
struct Cli {
    /// JSON files holding an array of signatures. Without files a built-in sample is shown.
    files: Vec<PathBuf>,

    /// Rows per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Rank by fuzzy score against the whole signature instead of the query language.
    #[arg(long)]
    fuzzy: bool,
}

enum TableState {
    Loading,
    Failed(String),
    Loaded(FunctionTable),
}

struct SigTableApp {
    query: String,
    state: Arc<Mutex<TableState>>,
}

impl SigTableApp {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            state: Arc::new(TableState::Loading.into()),
        }
    }

    fn paint(&mut self, ctx: &Context) {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let state = &mut *guard;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let TableState::Loading = state {
                    ui.add(Spinner::new());
                } else {
                    ui.label("🔍");
                }

                let input = TextEdit::singleline(&mut self.query)
                    .hint_text(PLACEHOLDER)
                    .desired_width(f32::INFINITY);

                ui.add(input);
            });

            ui.separator();

            match state {
                TableState::Loading => {}

                TableState::Failed(err) => {
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(color, err.as_str());
                }

                TableState::Loaded(table) => {
                    // picks up typing as well as a query entered while still loading
                    if table.query() != self.query {
                        table.set_query(self.query.as_str());
                    }

                    paint_table(ui, table);
                }
            }
        });
    }
}

fn paint_table(ui: &mut Ui, table: &mut FunctionTable) {
    Grid::new("signatures")
        .num_columns(3)
        .striped(true)
        .min_col_width(120.0)
        .show(ui, |ui| {
            ui.label(RichText::new("Name").strong());
            ui.label(RichText::new("Parameters").strong());
            ui.label(RichText::new("Returns").strong());
            ui.end_row();

            for sig in table.page_rows() {
                ui.monospace(sig.name.as_str());
                ui.monospace(sig.parameter_list());
                paint_type(ui, &sig.return_type);
                ui.end_row();
            }
        });

    if table.visible().is_empty() {
        ui.label("No results.");
    }

    ui.separator();

    ui.horizontal(|ui| {
        let page = table.pagination().page_index() + 1;
        let pages = table.page_count().max(1);
        ui.label(RichText::new(format!("Page {} of {}", page, pages)).small().weak());

        if ui.add_enabled(table.can_previous_page(), Button::new("Previous")).clicked() {
            table.previous_page();
        }

        if ui.add_enabled(table.can_next_page(), Button::new("Next")).clicked() {
            table.next_page();
        }
    });
}

/// Array types get a dimmed `[]` so they stand out from their element type.
fn paint_type(ui: &mut Ui, ty: &TypeName) {
    if !ty.is_array() {
        ui.monospace(ty.as_str());
        return;
    }

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.monospace(ty.element());
        ui.label(RichText::new("[]").monospace().weak());
    });
}

impl App for SigTableApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.paint(ctx);
    }
}

fn create_app(
    cc: &CreationContext<'_>,
    app: SigTableApp,
    providers: Vec<Arc<dyn Provider>>,
    matcher: Box<dyn Matcher>,
    page_size: usize,
) -> Box<dyn App> {
    cc.egui_ctx.set_visuals(Visuals::dark());

    let ctx = cc.egui_ctx.clone();
    let state_arc = Arc::clone(&app.state);

    spawn(move || {
        let loaded = match load_items(&providers) {
            Ok(items) => {
                log::info!("loaded {} signatures from {} providers", items.len(), providers.len());
                TableState::Loaded(FunctionTable::new(items, matcher, page_size))
            }

            Err(err) => {
                log::error!("failed to load signatures: {:#}", err);
                TableState::Failed(format!("{:#}", err))
            }
        };

        *state_arc.lock().unwrap_or_else(PoisonError::into_inner) = loaded;

        ctx.request_repaint();
    });

    Box::new(app)
}

fn load_items(providers: &[Arc<dyn Provider>]) -> Result<Vec<FunctionSignature>> {
    use rayon::prelude::*;

    let items: Vec<_> = providers.par_iter()
        .map(|prov| {
            let result = prov.load();
            if let Ok(items) = &result {
                log::debug!("provider {} returned {} signatures", prov.title(), items.len());
            }

            result
        })
        .collect();

    let items = items.into_iter()
        .flatten_ok()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(items)
}

fn providers_for(files: &[PathBuf]) -> Vec<Arc<dyn Provider>> {
    if files.is_empty() {
        return vec![Arc::new(Sample)];
    }

    files.iter()
        .map(|path| Arc::new(JsonFile::new(path)) as Arc<dyn Provider>)
        .collect_vec()
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 420.0]),
        ..Default::default()
    };

    let providers = providers_for(&cli.files);

    let matcher: Box<dyn Matcher> = if cli.fuzzy {
        Box::new(FuzzyMatcher(SkimMatcherV2::default().ignore_case()))
    } else {
        Box::new(SignatureMatcher)
    };

    let page_size = cli.page_size;
    let app = SigTableApp::new();
    let app_name = "sigtable";
    let app_creator: AppCreator = Box::new(move |cc| create_app(cc, app, providers, matcher, page_size));

    eframe::run_native(app_name, native_options, app_creator)
        .map_err(|err| anyhow::anyhow!(err.to_string()))
}
