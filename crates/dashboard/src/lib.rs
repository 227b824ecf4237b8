//! Desktop window hosting the dials.
//!
//! Owns the iced application loop and wires together all background tasks:
//! - Host metric monitor (one update per channel per poll)
//! - Config file watcher (live reload on change)
//! - Frame clock, subscribed only while an arc or bar is still animating

use dial_config::{default_path, load as load_config, ConfigWatcher, DashboardConfig};
use dial_core::{ChannelUpdate, DialWidget, Message};
use dial_theme::Theme;
use dial_widgets::Widget;
use futures::channel::mpsc::Sender;
use iced::{
    widget::{center, column, container, text, Row, Space},
    Element, Length, Size, Subscription, Task,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the dashboard window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    let window = read_config().window;

    iced::application(Dashboard::new, Dashboard::update, Dashboard::view)
        .title(Dashboard::title)
        .subscription(Dashboard::subscription)
        .style(Dashboard::style)
        .window_size(Size::new(window.width, window.height))
        .run()
}

fn read_config() -> DashboardConfig {
    load_config(default_path()).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        DashboardConfig::default()
    })
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Dashboard {
    config:  DashboardConfig,
    theme:   Theme,
    widgets: Vec<Box<dyn Widget>>,
}

impl Dashboard {
    fn new() -> (Self, Task<Message>) {
        (Self::from_config(read_config()), Task::none())
    }

    fn from_config(config: DashboardConfig) -> Self {
        let theme = Theme::from_config(&config.theme);
        let widgets = build_widgets(&config, &theme);
        info!(widgets = widgets.len(), "dashboard ready");
        Self { config, theme, widgets }
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::MetricUpdated(update) => {
                let routed = dispatch(&mut self.widgets, &update, Instant::now());
                if routed == 0 {
                    debug!(channel = %update.channel, "no widget bound to channel");
                }
            }
            Message::ConfigReloaded => match load_config(default_path()) {
                Ok(cfg) => {
                    info!("Config reloaded");
                    *self = Self::from_config(cfg);
                }
                Err(e) => warn!("Config reload failed: {e}"),
            },
            Message::Frame(now) => {
                for widget in &mut self.widgets {
                    widget.on_frame(now);
                }
            }
        }
        Task::none()
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        if self.widgets.is_empty() {
            return center(text("No widgets configured").size(self.theme.font_size)).into();
        }

        let gap = f32::from(self.theme.gap);
        let pad = self.theme.padding;
        let columns = self.config.window.columns.max(1);

        let mut cells = self.widgets.iter().map(|widget| -> Element<'_, Message> {
            container(widget.view(&self.theme))
                .padding(pad)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        });

        let mut grid = column![].spacing(gap);
        for filled in row_sizes(self.widgets.len(), columns) {
            let mut row: Vec<Element<'_, Message>> = cells.by_ref().take(filled).collect();
            // Pad the last row so every cell keeps the same width.
            row.extend((filled..columns).map(|_| Space::new().width(Length::Fill).into()));
            grid = grid.push(Row::from_vec(row).spacing(gap).height(Length::Fill));
        }

        container(grid)
            .padding(pad)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            Subscription::run(metric_stream),
            Subscription::run(config_stream),
        ];
        if self.widgets.iter().any(|w| w.is_animating()) {
            subscriptions.push(iced::window::frames().map(Message::Frame));
        }
        Subscription::batch(subscriptions)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color:       self.theme.font_color.to_iced(),
        }
    }
}

fn build_widgets(config: &DashboardConfig, theme: &Theme) -> Vec<Box<dyn Widget>> {
    config
        .widgets
        .iter()
        .map(|cfg| dial_widgets::build(cfg, theme))
        .collect()
}

/// Hand `update` to every widget bound to its channel.  Returns how many
/// widgets received it.
fn dispatch(widgets: &mut [Box<dyn Widget>], update: &ChannelUpdate, now: Instant) -> usize {
    let mut routed = 0;
    for widget in widgets.iter_mut().filter(|w| w.channel() == update.channel) {
        widget.on_value(&update.value, now);
        routed += 1;
    }
    routed
}

/// Number of widgets in each grid row, filling rows left to right.
fn row_sizes(count: usize, columns: usize) -> Vec<usize> {
    let columns = columns.max(1);
    (0..count)
        .step_by(columns)
        .map(|start| columns.min(count - start))
        .collect()
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.

/// Polls the host and forwards every channel update.  The poll interval is
/// read once at startup.
fn metric_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(64, |mut sender: Sender<Message>| async move {
        let interval_ms = read_config().window.poll_interval_ms;
        let mut rx = dial_system::spawn_monitor(interval_ms);

        while let Some(update) = rx.recv().await {
            if sender.try_send(Message::MetricUpdated(update)).is_err() {
                debug!("UI busy; dropping metric update");
            }
        }

        // Monitor task exited; stall rather than crash.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches the config file for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());
        info!(path = %watcher.path().display(), "watching config");

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
