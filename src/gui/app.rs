use crate::config::Config;
use crate::events::CalibrationTrigger;
use crate::gui::debug::Readout;
use crate::gui::dial::{self, Dial};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window;
use crate::sys::time::{LocalClock, TimeSource};
use gdk4::{Toplevel, ToplevelState};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub dial: Rc<RefCell<Dial>>,
    pub clock: Box<dyn TimeSource>,
    pub drawing_area: gtk::DrawingArea,
    animation: Option<gtk::TickCallbackId>,
    readout: Option<gtk::TickCallbackId>,
}

#[derive(Debug)]
pub enum AppMsg {
    Calibrate(CalibrationTrigger),
    VisibilityChanged(bool),
}

impl AppModel {
    fn calibrate(&mut self, trigger: CalibrationTrigger) {
        let now = self.clock.now();
        self.dial.borrow_mut().calibrate(now, trigger);
        self.drawing_area.queue_draw();
    }

    /// Cancels the recurring frame callbacks.
    fn stop(&mut self) {
        if let Some(id) = self.animation.take() {
            id.remove();
        }
        if let Some(id) = self.readout.take() {
            id.remove();
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = Config;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Ring Clock"),
            set_default_width: width,
            set_default_height: height,
            add_css_class: "ringclock-window",

            #[name = "overlay"]
            gtk::Overlay {
                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    add_css_class: "ringclock-dial",

                    connect_map[sender] => move |_| {
                        sender.input(AppMsg::VisibilityChanged(true));
                    },
                    connect_unmap[sender] => move |_| {
                        sender.input(AppMsg::VisibilityChanged(false));
                    },

                    add_controller = gtk::GestureClick {
                        connect_released[sender] => move |_, _, _, _| {
                            sender.input(AppMsg::Calibrate(CalibrationTrigger::Click));
                        }
                    }
                },

                add_overlay: &debug_label,
            }
        }
    }

    fn init(
        config: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (width, height) = (config.display.width, config.display.height);
        let debug_readout = config.display.debug_readout;

        theme::load_css();
        window::init_layer_shell(&root, &config.display);

        let debug_label = gtk::Label::builder()
            .halign(gtk::Align::Start)
            .valign(gtk::Align::End)
            .css_classes(["ringclock-debug"])
            .visible(debug_readout)
            .build();

        let model = AppModel {
            dial: Rc::new(RefCell::new(Dial::new(&config))),
            clock: Box::new(LocalClock),
            drawing_area: gtk::DrawingArea::default(),
            animation: None,
            readout: None,
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let colors = ThemeColors::from_config(&config.theme);
        let dial_draw = model.dial.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                let dial = dial_draw.borrow();
                if let Err(e) = dial::draw(
                    cr,
                    &dial.scene,
                    &dial.timeline,
                    &colors,
                    width as f64,
                    height as f64,
                ) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let dial_tick = model.dial.clone();
        model.animation = Some(widgets.drawing_area.add_tick_callback(
            move |area, frame_clock| {
                dial_tick.borrow_mut().advance_to(frame_clock.frame_time());
                area.queue_draw();
                glib::ControlFlow::Continue
            },
        ));

        model.readout = debug_readout.then(|| {
            debug_label.add_tick_callback(|label, _| {
                if let Some(readout) = Readout::sample() {
                    readout.show(label);
                }
                glib::ControlFlow::Continue
            })
        });

        // minimised toplevels keep their widgets mapped, so watch the surface state too
        let sender_state = sender.clone();
        root.connect_realize(move |window| {
            let Some(toplevel) = window
                .surface()
                .and_then(|s| s.downcast::<Toplevel>().ok())
            else {
                return;
            };
            let sender = sender_state.clone();
            toplevel.connect_state_notify(move |t| {
                let hidden = t.state().contains(ToplevelState::MINIMIZED);
                sender.input(AppMsg::VisibilityChanged(!hidden));
            });
        });

        model.calibrate(CalibrationTrigger::Startup);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Calibrate(trigger) => self.calibrate(trigger),
            AppMsg::VisibilityChanged(visible) => {
                let shown = self.dial.borrow_mut().set_visible(visible);
                if shown {
                    self.calibrate(CalibrationTrigger::Visible);
                }
            }
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        self.stop();
        log::info!("Dial torn down");
    }
}
