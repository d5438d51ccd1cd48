use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use kezuri_core as game;
use game::{EffectConfig, Outcome, Point2, PointerInput, PointerPhase, RevealEffect, StrokeOutcome};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, HtmlElement};

use crate::input;
use crate::surface::CardSurface;
use crate::utils::viewport_size;

fn element_by_id<T: JsCast>(id: &str) -> Result<T, JsValue> {
    gloo::utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Could not find id=\"{}\" element", id)))?
        .dyn_into::<T>()
        .map_err(JsValue::from)
}

/// A mounted card: the reveal engine, the canvases it paints and the reward control it unhides.
///
/// Event listeners hold the card, so it stays alive for as long as the page does.
pub(crate) struct ScratchCard {
    effect: RefCell<RevealEffect>,
    surface: RefCell<CardSurface>,
    reward: HtmlElement,
    listeners: RefCell<Vec<EventListener>>,
}

impl ScratchCard {
    pub(crate) fn mount(
        config: EffectConfig,
        outcome: Option<Outcome>,
        canvas_id: &str,
        reward_id: &str,
    ) -> Result<Rc<Self>, JsValue> {
        let canvas: HtmlCanvasElement = element_by_id(canvas_id)?;
        let reward: HtmlElement = element_by_id(reward_id)?;
        let surface = CardSurface::new(canvas)?;

        let size = config.layout.resolve(viewport_size()?);
        let effect = RevealEffect::new(config, size, outcome)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        surface.set_size(size);

        let card = Rc::new(Self {
            effect: RefCell::new(effect),
            surface: RefCell::new(surface),
            reward,
            listeners: RefCell::new(Vec::new()),
        });
        card.render();
        card.install_listeners();
        Ok(card)
    }

    /// Single entry point for every mouse and touch event, with the position still in client space.
    fn dispatch(&self, phase: PointerPhase, client: Point2) {
        let position = self.surface.borrow().geometry().to_buffer(client);
        self.apply(PointerInput::new(phase, position));
    }

    fn apply(&self, input: PointerInput) {
        let outcome = self.effect.borrow_mut().handle(input);
        if outcome.has_update() {
            self.render();
        }
        if let StrokeOutcome::RewardUnlocked { fraction } = outcome {
            log::debug!("showing reward at {:.3}", fraction);
            self.show_reward();
        }
    }

    fn render(&self) {
        let effect = self.effect.borrow();
        if let Err(err) = self.surface.borrow_mut().render(&effect) {
            log::error!("failed to render card: {:?}", err);
        }
    }

    fn show_reward(&self) {
        if let Err(err) = self.reward.style().set_property("display", "block") {
            log::error!("failed to show reward: {:?}", err);
        }
    }

    fn on_resize(&self) {
        let viewport = match viewport_size() {
            Ok(viewport) => viewport,
            Err(err) => {
                log::error!("could not read viewport size: {:?}", err);
                return;
            }
        };
        let size = self.effect.borrow().config().layout.resolve(viewport);
        if let Err(err) = self.effect.borrow_mut().resize(size) {
            log::error!("could not resize card to {:?}: {}", size, err);
            return;
        }
        self.surface.borrow().set_size(size);
        log::debug!("card reset at {}x{}", size.0, size.1);
        self.render();
    }

    fn install_listeners(self: &Rc<Self>) {
        let config = *self.effect.borrow().config();
        let canvas = self.surface.borrow().canvas().clone();
        let mut listeners = Vec::new();

        for (event_type, phase) in input::bindings(config.touch) {
            let is_touch = event_type.starts_with("touch");
            let options = if is_touch {
                EventListenerOptions::enable_prevent_default()
            } else {
                EventListenerOptions::default()
            };
            let card = Rc::clone(self);
            let listener =
                EventListener::new_with_options(&canvas, event_type, options, move |event: &Event| {
                    let client = match input::client_position(event) {
                        Some(client) => client,
                        None if phase == PointerPhase::Move => return,
                        None => (0.0, 0.0),
                    };
                    if is_touch {
                        // keeps the page from scrolling and from emulating mouse events
                        event.prevent_default();
                    }
                    card.dispatch(phase, client);
                });
            listeners.push(listener);
        }

        if config.layout.is_responsive() {
            let card = Rc::clone(self);
            let listener = EventListener::new(&gloo::utils::window(), "resize", move |_event| {
                card.on_resize();
            });
            listeners.push(listener);
        }

        *self.listeners.borrow_mut() = listeners;
    }
}
