//! Arena Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Window};

    use arena_dash::sim::{
        FrameClock, GameState, HazardKind, HazardSpec, Key, LevelId, LevelLayout, LevelTransition, Rect, step,
    };
    use arena_dash::{FrameView, Tuning};

    /// Page elements the game reads once and then writes every frame
    struct Page {
        container: HtmlElement,
        character: HtmlElement,
        hazards: Vec<HtmlElement>,
        heart: Option<Element>,
        message: Option<Element>,
        score: Option<Element>,
        lives: Option<Element>,
        time: Option<Element>,
        particles: Vec<HtmlElement>,
    }

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FrameClock,
        page: Page,
    }

    fn px(value: f32) -> String {
        format!("{value}px")
    }

    /// Parse a computed style length such as `"120px"`
    fn parse_px(value: &str) -> Option<f32> {
        value.trim().trim_end_matches("px").parse().ok()
    }

    /// Box of an element relative to the container's top-left corner
    fn relative_rect(element: &Element, container: &Element) -> Rect {
        let origin = container.get_bounding_client_rect();
        let rect = element.get_bounding_client_rect();
        Rect::new(
            (rect.left() - origin.left()) as f32,
            (rect.top() - origin.top()) as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    /// Top/left (and optionally size) from the element's computed style
    fn computed_rect(window: &Window, element: &HtmlElement) -> Option<Rect> {
        let style = window.get_computed_style(element).ok()??;
        let read = |name: &str| style.get_property_value(name).ok().and_then(|v| parse_px(&v));
        let top = read("top")?;
        let left = read("left")?;
        let width = read("width").unwrap_or(element.offset_width() as f32);
        let height = read("height").unwrap_or(element.offset_height() as f32);
        Some(Rect::new(left, top, width, height))
    }

    fn html_elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
        let Ok(list) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn is_shown(element: &Option<Element>) -> bool {
        element.as_ref().is_some_and(|el| !el.class_list().contains("hidden"))
    }

    fn set_hidden(element: &Option<Element>, hidden: bool) {
        if let Some(el) = element {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn set_text(element: &Option<Element>, text: &str) {
        if let Some(el) = element {
            el.set_text_content(Some(text));
        }
    }

    fn place(element: &HtmlElement, x: f32, y: f32) {
        let style = element.style();
        let _ = style.set_property("left", &px(x));
        let _ = style.set_property("top", &px(y));
    }

    /// Read the level geometry from the page; `None` if a required element is missing
    fn read_page(window: &Window, document: &Document) -> Option<(Page, LevelLayout)> {
        let container: HtmlElement = document.get_element_by_id("game-container")?.dyn_into().ok()?;
        let character: HtmlElement = document.get_element_by_id("character")?.dyn_into().ok()?;
        let target = document.get_element_by_id("target")?;

        let walls = html_elements(document, ".wall")
            .iter()
            .filter_map(|wall| computed_rect(window, wall))
            .collect();

        let mut hazard_elements = Vec::new();
        let mut hazards = Vec::new();
        for element in html_elements(document, ".obstacle") {
            let Some(rect) = computed_rect(window, &element) else {
                continue;
            };
            let classes = element.class_list();
            let kind = if classes.contains("obstacle-type1") {
                HazardKind::Chaser
            } else if classes.contains("obstacle-type2") {
                HazardKind::VerticalPatrol
            } else if classes.contains("obstacle-type3") {
                HazardKind::HorizontalPatrol
            } else {
                HazardKind::Static
            };
            let size = (element.offset_width() as f32, element.offset_height() as f32);
            hazards.push(HazardSpec {
                kind,
                rect: Rect::new(rect.left(), rect.top(), size.0, size.1),
            });
            hazard_elements.push(element);
        }

        let heart = document.get_element_by_id("heart");
        let message = document.get_element_by_id("message");

        let layout = LevelLayout {
            width: container.client_width() as f32,
            height: container.client_height() as f32,
            start: relative_rect(&character, &container).pos,
            character_size: character.offset_width() as f32,
            walls,
            hazards,
            target: relative_rect(&target, &container),
            message: message.as_ref().and_then(|m| m.text_content()).unwrap_or_default(),
            message_visible: is_shown(&message),
            heart_visible: is_shown(&heart),
        };

        let page = Page {
            container,
            character,
            hazards: hazard_elements,
            heart,
            message,
            score: document.get_element_by_id("score"),
            lives: document.get_element_by_id("lives"),
            time: document.get_element_by_id("time"),
            particles: Vec::new(),
        };

        Some((page, layout))
    }

    impl Page {
        /// Apply one frame of render instructions
        fn apply(&mut self, document: &Document, view: &FrameView) {
            place(&self.character, view.character.x, view.character.y);
            let _ = self
                .character
                .style()
                .set_property("display", if view.status.visible { "block" } else { "none" });

            let classes = self.character.class_list();
            let _ = classes.toggle_with_force("hurt", view.status.hurt);
            let _ = classes.toggle_with_force("recovering", view.status.recovering);
            let _ = classes.toggle_with_force("celebrate", view.status.celebrating);

            for (element, pos) in self.hazards.iter().zip(&view.hazards) {
                place(element, pos.x, pos.y);
            }

            let _ = self.container.class_list().toggle_with_force("shake", view.shaking);
            set_hidden(&self.heart, !view.heart_visible);
            match &view.message {
                Some(text) => {
                    set_text(&self.message, text);
                    set_hidden(&self.message, false);
                }
                None => set_hidden(&self.message, true),
            }

            set_text(&self.score, &view.hud.score);
            set_text(&self.lives, &view.hud.lives);
            set_text(&self.time, &view.hud.time);

            self.sync_particles(document, view);
        }

        /// Keep one `.particle` element per live particle
        fn sync_particles(&mut self, document: &Document, view: &FrameView) {
            while self.particles.len() > view.particles.len() {
                if let Some(el) = self.particles.pop() {
                    el.remove();
                }
            }
            while self.particles.len() < view.particles.len() {
                let Some(el) = document
                    .create_element("div")
                    .ok()
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                else {
                    break;
                };
                let _ = el.class_list().add_1("particle");
                let _ = self.container.append_child(&el);
                self.particles.push(el);
            }

            for (el, particle) in self.particles.iter().zip(&view.particles) {
                place(el, particle.pos.x, particle.pos.y);
                let style = el.style();
                let _ = style.set_property("transform", &format!("scale({})", particle.scale));
                let _ = style.set_property("opacity", &particle.opacity.to_string());
            }
        }
    }

    /// Optional `<script id="tuning" type="application/json">` override
    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = document.get_element_by_id("tuning").and_then(|el| el.text_content()) else {
            return Tuning::default();
        };
        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from page");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring page tuning: {}", e);
                Tuning::default()
            }
        }
    }

    fn current_level(window: &Window) -> LevelId {
        let path = window.location().pathname().unwrap_or_default();
        LevelId::from_page(path.rsplit('/').next().unwrap_or_default())
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Arena Dash starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let Some((page, layout)) = read_page(&window, &document) else {
            log::warn!("Game page is missing required elements; not starting");
            return;
        };

        let tuning = load_tuning(&document);
        let level = current_level(&window);
        let seed = js_sys::Date::now() as u64;
        let clock = FrameClock::new(
            window.performance().map(|p| p.now()).unwrap_or(0.0),
            tuning.max_frame_delta,
        );

        let state = match GameState::new(level, layout, tuning, seed) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Invalid level layout, not starting: {}", e);
                return;
            }
        };

        let game = Rc::new(RefCell::new(Game { state, clock, page }));
        {
            let mut g = game.borrow_mut();
            let view = FrameView::capture(&g.state);
            g.page.apply(&document, &view);
        }

        setup_input_handlers(&document, game.clone());
        request_animation_frame(game);
        log::info!("Arena Dash running!");
    }

    fn setup_input_handlers(document: &Document, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_name(&event.key()) {
                    let mut g = game.borrow_mut();
                    if g.state.is_terminal() {
                        return;
                    }
                    g.state.press(key);
                    event.prevent_default();
                }
            });
            let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_key_name(&event.key()) {
                    game.borrow_mut().state.release(key);
                    event.prevent_default();
                }
            });
            let _ = document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let result = {
            let mut g = game.borrow_mut();
            let dt = g.clock.delta(time);
            let result = step(&mut g.state, dt);
            let view = FrameView::capture(&g.state);
            g.page.apply(&document, &view);
            result
        };

        if let Some(transition) = result.transition {
            follow_transition(transition);
        }

        if result.reschedule {
            request_animation_frame(game);
        }
    }

    fn follow_transition(transition: LevelTransition) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let _ = match transition {
            LevelTransition::Restart(_) => location.reload(),
            LevelTransition::Advance(next) => location.set_href(next.page()),
        };
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Arena Dash (native) starting...");
    log::info!("Native mode plays a scripted run - use `trunk serve` for the web version");

    run_scripted_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play level one headless with a fixed input script and report the outcome
#[cfg(not(target_arch = "wasm32"))]
fn run_scripted_demo() {
    use arena_dash::consts::FRAME_DT;
    use arena_dash::sim::{GameState, LEVEL_ONE_ROUTE, LevelId, step};
    use arena_dash::{FrameView, Tuning};

    let mut state = match GameState::for_level(LevelId::One, Tuning::default(), 2024) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Level one failed to load: {}", e);
            return;
        }
    };

    // Walk the known route through level one
    let mut transition = None;
    'script: for (key, secs) in LEVEL_ONE_ROUTE {
        state.press(key);
        let frames = (secs / FRAME_DT).round() as u32;
        for _ in 0..frames {
            let result = step(&mut state, FRAME_DT);
            if result.transition.is_some() || !result.reschedule {
                transition = result.transition;
                break 'script;
            }
        }
        state.release(key);
    }

    // Let any terminal delay play out
    while transition.is_none() {
        let result = step(&mut state, FRAME_DT);
        transition = result.transition;
        if !result.reschedule || (result.running && state.elapsed > 30.0) {
            break;
        }
    }

    println!(
        "Outcome: {:?}, lives {}, distance {:.0}, score {}, transition {:?}",
        state.phase,
        state.character.health,
        state.distance,
        state.score(),
        transition
    );
    match serde_json::to_string_pretty(&FrameView::capture(&state)) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final frame: {}", e),
    }
}
