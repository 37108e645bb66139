//! Ratatui-based terminal dashboard.
//!
//! The TUI provides a dataset picker (grouped by user group), then renders
//! the reshaped dataset as a bar or pie view with a summary panel and an
//! expandable data table. Load failures surface in the status line; the UI
//! itself never crashes on a bad dataset.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table},
    Terminal,
};

use crate::app::pipeline::{self, LoadConfig, RunOutput};
use crate::cli::DatasetArgs;
use crate::domain::{Catalog, ChartKind, USER_GROUPS};
use crate::error::{AppError, ErrorKind};
use crate::report::{self, fmt_count, unit_label};

mod chart;

/// Start the TUI.
pub fn run(args: DatasetArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(ErrorKind::Terminal, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::new(ErrorKind::Terminal, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(
                ErrorKind::Terminal,
                format!("Failed to enter alternate screen: {e}"),
            ));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    data_dir: PathBuf,
    catalog: Catalog,
    group_idx: usize,
    dataset_idx: usize,
    run: Option<RunOutput>,
    /// Toggle per unit of the loaded dataset, aligned with `run.table.units`.
    selected_units: Vec<bool>,
    chart: ChartKind,
    table_expanded: bool,
    status: String,
}

impl App {
    fn new(args: DatasetArgs) -> Result<Self, AppError> {
        // The catalog is static; load it once and reuse it across selections.
        let catalog = crate::io::load_catalog(&args.data_dir)?;

        let mut app = Self {
            data_dir: args.data_dir,
            catalog,
            group_idx: 0,
            dataset_idx: 0,
            run: None,
            selected_units: Vec::new(),
            chart: ChartKind::Bar,
            table_expanded: false,
            status: String::new(),
        };

        if let Some(code) = args.dataset {
            if let Some(idx) = USER_GROUPS[0].datasets.iter().position(|d| *d == code) {
                app.dataset_idx = idx;
            } else {
                app.status = format!("Unknown dataset '{code}'; showing default.");
            }
        }

        app.load_selected();
        Ok(app)
    }

    fn current_code(&self) -> &'static str {
        let group = &USER_GROUPS[self.group_idx];
        group.datasets[self.dataset_idx.min(group.datasets.len() - 1)]
    }

    fn load_selected(&mut self) {
        let config = LoadConfig::new(
            self.data_dir.clone(),
            Some(self.current_code().to_string()),
        );
        match pipeline::run_with_catalog(&config, &self.catalog) {
            Ok(run) => {
                self.selected_units = vec![true; run.table.units.len()];
                self.status = format!("Loaded {} ({} categories).", run.code, run.table.records.len());
                self.run = Some(run);
            }
            Err(err) => {
                self.run = None;
                self.selected_units.clear();
                self.status = format!("{err}");
            }
        }
    }

    /// Unit ids currently toggled on, in column order.
    fn selected_unit_ids(&self) -> Vec<&str> {
        let Some(run) = &self.run else {
            return Vec::new();
        };
        run.table
            .units
            .iter()
            .zip(&self.selected_units)
            .filter(|(_, on)| **on)
            .map(|(u, _)| u.id.as_str())
            .collect()
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(ErrorKind::Terminal, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(ErrorKind::Terminal, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read()
                .map_err(|e| AppError::new(ErrorKind::Terminal, format!("Event read error: {e}")))?
            {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.group_idx = (self.group_idx + 1) % USER_GROUPS.len();
                self.dataset_idx = 0;
                self.load_selected();
            }
            KeyCode::BackTab => {
                self.group_idx = (self.group_idx + USER_GROUPS.len() - 1) % USER_GROUPS.len();
                self.dataset_idx = 0;
                self.load_selected();
            }
            KeyCode::Up => {
                if self.dataset_idx > 0 {
                    self.dataset_idx -= 1;
                }
            }
            KeyCode::Down => {
                if self.dataset_idx + 1 < USER_GROUPS[self.group_idx].datasets.len() {
                    self.dataset_idx += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('r') => self.load_selected(),
            KeyCode::Char('c') => {
                self.chart = self.chart.toggled();
                self.status = format!("chart: {}", self.chart.display_name());
            }
            KeyCode::Char('t') => {
                self.table_expanded = !self.table_expanded;
                self.status = if self.table_expanded {
                    "Table expanded.".to_string()
                } else {
                    "Table collapsed.".to_string()
                };
            }
            KeyCode::Char('a') => {
                for on in &mut self.selected_units {
                    *on = true;
                }
                self.status = "All tracts selected.".to_string();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if let Some(on) = self.selected_units.get_mut(idx) {
                    *on = !*on;
                    self.status = format!("Toggled tract #{}.", idx + 1);
                }
            }
            _ => {}
        }
        false
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let group = &USER_GROUPS[self.group_idx];
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("tractdash", Style::default().fg(Color::Cyan)),
            Span::raw(" — Baltimore census tract demographics (ACS 2022 5yr)"),
        ]));
        lines.push(Line::from(Span::styled(
            format!("group: {} | {}", group.name, group.description),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(0)])
            .split(area);

        self.draw_dataset_list(frame, chunks[0]);
        self.draw_main(frame, chunks[1]);
    }

    fn draw_dataset_list(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let group = &USER_GROUPS[self.group_idx];
        let items: Vec<ListItem> = group
            .datasets
            .iter()
            .map(|code| {
                let name = self.catalog.display_name(code).unwrap_or("(not in catalog)");
                ListItem::new(format!("{code}  {name}"))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().title("Datasets").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.dataset_idx));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_main(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let table_height = if self.table_expanded {
            let rows = self.run.as_ref().map(|r| r.table.records.len()).unwrap_or(0);
            (rows as u16).saturating_add(4).min(area.height / 2)
        } else {
            0
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),
                Constraint::Min(0),
                Constraint::Length(table_height),
            ])
            .split(area);

        self.draw_summary(frame, chunks[0]);
        self.draw_chart(frame, chunks[1]);
        if self.table_expanded {
            self.draw_table(frame, chunks[2]);
        }
    }

    fn draw_summary(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Data Summary").borders(Borders::ALL);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("No data loaded.")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(msg, area);
            return;
        };

        let selected = self.selected_unit_ids();
        let summary = report::summarize(&run.table, &selected);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(format!(
            "Dataset: {} ({})",
            run.display_name, run.code
        )));
        lines.push(Line::from(format!(
            "Total Count: {}   Categories: {}   Selected Tracts: {}/{}",
            fmt_count(summary.grand_total),
            summary.category_count,
            selected.len(),
            run.table.units.len(),
        )));
        if let Some((name, total)) = &summary.highest {
            let pct = if summary.grand_total > 0 {
                *total as f64 / summary.grand_total as f64 * 100.0
            } else {
                0.0
            };
            lines.push(Line::from(format!(
                "Highest Category: {name} ({} persons - {pct:.2}%)",
                fmt_count(*total)
            )));
        }

        let colors = chart::palette(selected.len());
        lines.push(chart::legend_line(&selected, &colors));
        lines.push(Line::from(Span::styled(
            "1-9 toggle tract, a select all",
            Style::default().fg(Color::DarkGray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(block);
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for data...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(msg, area);
            return;
        };

        let selected = self.selected_unit_ids();
        let colors = chart::palette(selected.len().max(run.table.records.len()));

        match self.chart {
            ChartKind::Bar => {
                let widget = chart::bar_chart(&run.table, &selected, &colors);
                frame.render_widget(widget, area);
            }
            ChartKind::Pie => {
                let slices = report::pie_breakdown(&run.table, &selected);
                let lines = chart::pie_lines(&slices, &colors, area.width as usize);
                let p = Paragraph::new(Text::from(lines)).block(
                    Block::default()
                        .title("Categories Distribution")
                        .borders(Borders::ALL),
                );
                frame.render_widget(p, area);
            }
        }
    }

    fn draw_table(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let Some(run) = &self.run else {
            return;
        };

        let selected = self.selected_unit_ids();

        let mut header_cells = vec![Cell::from("Category")];
        for id in &selected {
            header_cells.push(Cell::from(unit_label(id)));
        }
        let header = Row::new(header_cells)
            .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = run
            .table
            .records
            .iter()
            .map(|record| {
                let mut cells = vec![Cell::from(record.name.clone())];
                for id in &selected {
                    let text = record
                        .value(id)
                        .map(fmt_count)
                        .unwrap_or_default();
                    cells.push(Cell::from(text));
                }
                Row::new(cells)
            })
            .collect();

        let mut widths = vec![Constraint::Min(24)];
        widths.extend(selected.iter().map(|_| Constraint::Length(12)));

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title("Data Table").borders(Borders::ALL));
        frame.render_widget(table, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  Enter load  Tab group  c chart  t table  1-9 tracts  r reload  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}
