//! Binds the page controls to the shared `Params`.
//!
//! The panel is the only writer. Each control applies its value through the
//! clamping setters and writes the normalized value back, so what the input
//! shows always matches what the next frame draws.

use crate::constants::*;
use crate::controls;
use crate::dom;
use crate::readout;
use lissajous_core::{Direction, Params, Rgb};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire(document: &web::Document, params: Rc<RefCell<Params>>) {
    wire_frequencies(document, &params);
    wire_points_count(document, &params);
    wire_duration(document, &params);
    wire_direction(document, &params);
    wire_opacity(document, &params);
    wire_colors(document, &params);
    readout::update_ratio(document, params.borrow().ratio());
}

/// Fill `id` with `initial` and call `on_value` with the input on `event`.
fn bind_input(
    document: &web::Document,
    id: &str,
    event: &str,
    initial: &str,
    mut on_value: impl FnMut(&web::HtmlInputElement) + 'static,
) -> Option<web::HtmlInputElement> {
    let input = match dom::element_by_id::<web::HtmlInputElement>(document, id) {
        Ok(i) => i,
        Err(e) => {
            log::warn!("[panel] {:?}", e);
            return None;
        }
    };
    input.set_value(initial);
    let input_for_listener = input.clone();
    dom::add_listener(&input, event, move || on_value(&input_for_listener));
    Some(input)
}

fn wire_frequencies(document: &web::Document, params: &Rc<RefCell<Params>>) {
    let bindings: [(&str, fn(&mut Params, f64), fn(&Params) -> f64); 2] = [
        (CONTROL_A_ID, Params::set_a, Params::a),
        (CONTROL_B_ID, Params::set_b, Params::b),
    ];
    for (id, set, get) in bindings {
        let p = params.clone();
        let doc = document.clone();
        let initial = get(&params.borrow()).to_string();
        bind_input(document, id, "change", &initial, move |input| {
            let mut params = p.borrow_mut();
            if let Some(v) = controls::parse_frequency(&input.value(), FREQUENCY_STEP) {
                set(&mut params, v);
                readout::update_ratio(&doc, params.ratio());
            }
            input.set_value(&get(&params).to_string());
        });
    }
}

fn wire_points_count(document: &web::Document, params: &Rc<RefCell<Params>>) {
    let p = params.clone();
    let initial = params.borrow().points_count().to_string();
    bind_input(document, CONTROL_POINTS_ID, "change", &initial, move |input| {
        let mut params = p.borrow_mut();
        if let Some(n) = controls::parse_points_count(&input.value(), POINTS_STEP) {
            params.set_points_count(n);
        }
        input.set_value(&params.points_count().to_string());
    });
}

fn wire_duration(document: &web::Document, params: &Rc<RefCell<Params>>) {
    let p = params.clone();
    let initial = params.borrow().duration_ms().to_string();
    bind_input(document, CONTROL_DURATION_ID, "change", &initial, move |input| {
        let mut params = p.borrow_mut();
        if let Some(ms) = controls::parse_duration(&input.value(), DURATION_STEP_MS) {
            params.set_duration_ms(ms);
        }
        input.set_value(&params.duration_ms().to_string());
    });
}

fn wire_direction(document: &web::Document, params: &Rc<RefCell<Params>>) {
    let select = match dom::element_by_id::<web::HtmlSelectElement>(document, CONTROL_DIRECTION_ID)
    {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[panel] {:?}", e);
            return;
        }
    };
    select.set_value(params.borrow().direction().as_str());
    let p = params.clone();
    let select_for_listener = select.clone();
    dom::add_listener(&select, "change", move || {
        match select_for_listener.value().parse::<Direction>() {
            Ok(d) => p.borrow_mut().set_direction(d),
            Err(e) => {
                log::warn!("[panel] {}", e);
                select_for_listener.set_value(p.borrow().direction().as_str());
            }
        }
    });
}

fn wire_opacity(document: &web::Document, params: &Rc<RefCell<Params>>) {
    let p = params.clone();
    let initial = params.borrow().opacity().to_string();
    bind_input(document, CONTROL_OPACITY_ID, "input", &initial, move |input| {
        if let Some(v) = controls::parse_opacity(&input.value(), OPACITY_STEP) {
            p.borrow_mut().set_opacity(v);
        }
    });
}

fn wire_colors(document: &web::Document, params: &Rc<RefCell<Params>>) {
    let p = params.clone();
    let background = bind_input(
        document,
        CONTROL_BACKGROUND_ID,
        "input",
        &params.borrow().background().to_hex(),
        move |input| match Rgb::from_hex(&input.value()) {
            Ok(c) => p.borrow_mut().set_background(c),
            Err(e) => log::warn!("[panel] {}", e),
        },
    );
    let p = params.clone();
    let foreground = bind_input(
        document,
        CONTROL_FOREGROUND_ID,
        "input",
        &params.borrow().foreground().to_hex(),
        move |input| match Rgb::from_hex(&input.value()) {
            Ok(c) => p.borrow_mut().set_foreground(c),
            Err(e) => log::warn!("[panel] {}", e),
        },
    );

    let p = params.clone();
    dom::add_click_listener(document, REVERSE_COLORS_ID, move || {
        let (bg, fg) = {
            let mut params = p.borrow_mut();
            params.reverse_colors();
            (params.background(), params.foreground())
        };
        // keep the pickers in step with the swap
        if let Some(input) = &background {
            input.set_value(&bg.to_hex());
        }
        if let Some(input) = &foreground {
            input.set_value(&fg.to_hex());
        }
        log::info!("[panel] reversed colors bg={} fg={}", bg.to_hex(), fg.to_hex());
    });
}
