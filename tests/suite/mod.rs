mod events;
mod exploration;
mod import;
mod navigation;
mod transcription;
