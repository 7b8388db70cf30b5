use log::info;
use tokio::{
    sync::mpsc::{self, UnboundedSender},
    task::JoinHandle,
};

use crate::types::StreamFrame;

pub mod component;
pub mod feeder;

pub use self::{component::Component, feeder::PipelineFeeder};

pub struct Pipeline {
    components: Vec<Component>,
    feeding_sender: Option<UnboundedSender<StreamFrame>>,

    tag: String,

    bound: bool,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            feeding_sender: None,

            tag: "".to_string(),

            bound: false,
        }
    }

    pub fn link(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    pub fn get_feeder(&self) -> PipelineFeeder {
        let sender = self.feeding_sender.as_ref().unwrap().clone();
        PipelineFeeder::new(sender)
    }

    pub fn run(self) -> Vec<JoinHandle<()>> {
        info!("[{}] Launching tasks...", self.tag);
        if !self.bound {
            panic!("[{}] Called 'run' before binding the pipeline", self.tag);
        }

        let mut handles = Vec::new();

        for component in self.components {
            let handle = component.launch();
            handles.push(handle);
        }

        handles
    }

    pub fn bind(mut self) -> Self {
        info!("[{}] Binding channels...", self.tag);

        for i in 0..self.components.len() - 1 {
            let (sender, receiver) = mpsc::unbounded_channel::<StreamFrame>();

            let src_component = self.components.get_mut(i).unwrap();
            src_component.set_sender(sender);

            let dst_component = self.components.get_mut(i + 1).unwrap();
            dst_component.set_receiver(receiver);
        }

        self.bound = true;

        self
    }

    pub fn feedable(mut self) -> Self {
        let head = self.components.get_mut(0).unwrap();

        let (sender, receiver) = mpsc::unbounded_channel::<StreamFrame>();
        self.feeding_sender = Some(sender);

        head.set_receiver(receiver);

        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
