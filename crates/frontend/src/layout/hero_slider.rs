//! Home-page hero slider.

use crate::layout::global_context::use_app_context;
use crate::shared::icons::icon;
use contracts::shared::config::{SiteConfig, SlideConfig};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Current slide index. Out-of-range targets wrap: past the end goes to the
/// first slide, below zero goes to the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderState {
    index: usize,
    len: usize,
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn move_by(&mut self, delta: isize) {
        self.jump_to(self.index as isize + delta);
    }

    pub fn jump_to(&mut self, target: isize) {
        if self.len == 0 {
            return;
        }
        self.index = if target >= self.len as isize {
            0
        } else if target < 0 {
            self.len - 1
        } else {
            target as usize
        };
    }
}

/// Slides and autoplay period taken from the `[slider]` config section.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPlan {
    pub slides: Vec<SlideConfig>,
    /// `None` when autoplay is off (`interval_secs = 0`)
    pub autoplay_ms: Option<u32>,
}

impl SliderPlan {
    /// `None` when there are no slides to show.
    pub fn from_config(config: &SiteConfig) -> Option<Self> {
        let slider = &config.slider;
        if slider.slides.is_empty() {
            return None;
        }

        Some(Self {
            slides: slider.slides.clone(),
            autoplay_ms: (slider.interval_secs > 0)
                .then(|| slider.interval_secs.saturating_mul(1000)),
        })
    }
}

/// Mounted only after the config has loaded, so `[slider]` from
/// `config.toml` is what gets rendered.
#[component]
pub fn HeroSlider() -> impl IntoView {
    let ctx = use_app_context();
    let Some(SliderPlan { slides, autoplay_ms }) =
        ctx.config.with_untracked(SliderPlan::from_config)
    else {
        return ().into_any();
    };

    let state = RwSignal::new(SliderState::new(slides.len()));

    if let Some(period) = autoplay_ms {
        let autoplay = StoredValue::new_local(Some(Interval::new(period, move || {
            state.update(|s| s.move_by(1));
        })));
        on_cleanup(move || {
            if let Some(interval) = autoplay.try_update_value(Option::take).flatten() {
                interval.cancel();
            }
        });
    }

    let slide_views = slides
        .iter()
        .enumerate()
        .map(|(idx, slide)| {
            let is_active = move || state.with(|s| s.index() == idx);
            view! {
                <div
                    class="slide"
                    class:active=is_active
                    style:display=move || if is_active() { "flex" } else { "none" }
                    style:background-image=format!("url('{}')", slide.image)
                >
                    <div class="slide-caption">
                        <h1>{slide.title.clone()}</h1>
                        <p>{slide.subtitle.clone()}</p>
                        <a href="shop.html" class="btn-primary">"Shop Now"</a>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..slides.len())
        .map(|idx| {
            view! {
                <span
                    class="dot"
                    class:active=move || state.with(|s| s.index() == idx)
                    on:click=move |_| state.update(|s| s.jump_to(idx as isize))
                ></span>
            }
        })
        .collect_view();

    view! {
        <div class="hero-slider">
            {slide_views}
            <button class="slider-prev" on:click=move |_| state.update(|s| s.move_by(-1))>
                {icon("chevron-left")}
            </button>
            <button class="slider-next" on:click=move |_| state.update(|s| s.move_by(1))>
                {icon("chevron-right")}
            </button>
            <div class="slider-dots">{dots}</div>
        </div>
    }
    .into_any()
}
