use std::collections::HashMap;
use std::rc::Rc;

use log::debug;
use slotmap::{SlotMap, new_key_type};
use wired_core::WiredError;

use crate::Slider;
use crate::gestures::GestureEvent;
use crate::props::SliderProps;

new_key_type! {
    pub struct SliderKey;
}

pub type SliderFactory = Rc<dyn Fn() -> Slider>;

/// Tag-name -> factory table plus the sliders created from it. Owned by the
/// embedding application; there is no process-wide registry.
#[derive(Default)]
pub struct WidgetRegistry {
    factories: HashMap<String, SliderFactory>,
    instances: SlotMap<SliderKey, Slider>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `wired-slider` already defined.
    pub fn with_defaults() -> Self {
        let mut r = Self::new();
        r.factories
            .insert("wired-slider".to_string(), Rc::new(Slider::new));
        r
    }

    pub fn define(
        &mut self,
        tag: impl Into<String>,
        factory: impl Fn() -> Slider + 'static,
    ) -> Result<(), WiredError> {
        let tag = tag.into();
        if self.factories.contains_key(&tag) {
            return Err(WiredError::AlreadyDefined(tag));
        }
        debug!("registry: defined <{tag}>");
        self.factories.insert(tag, Rc::new(factory));
        Ok(())
    }

    pub fn is_defined(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    pub fn create(&mut self, tag: &str, props: &SliderProps) -> Result<SliderKey, WiredError> {
        let factory = self
            .factories
            .get(tag)
            .ok_or_else(|| WiredError::UnknownTag(tag.to_string()))?;
        let mut slider = factory();
        slider.apply_props(props);
        Ok(self.instances.insert(slider))
    }

    pub fn get(&self, key: SliderKey) -> Option<&Slider> {
        self.instances.get(key)
    }

    pub fn get_mut(&mut self, key: SliderKey) -> Option<&mut Slider> {
        self.instances.get_mut(key)
    }

    pub fn remove(&mut self, key: SliderKey) -> Option<Slider> {
        self.instances.remove(key)
    }

    /// Routes a gesture to one slider. Returns false for stale keys.
    pub fn dispatch(&mut self, key: SliderKey, event: GestureEvent) -> bool {
        match self.instances.get_mut(key) {
            Some(slider) => {
                slider.handle_gesture(event);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
