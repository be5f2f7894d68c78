use glam::{Quat, Vec3};
use uuid::Uuid;

use crate::animation::binding::TargetPath;
use crate::animation::tracks::KeyframeTrack;

#[derive(Debug, Clone)]
pub struct TrackMeta {
    pub node_name: String,
    pub target: TargetPath,
}

#[derive(Debug, Clone)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

/// A complete track definition: metadata plus keyframe data.
#[derive(Debug, Clone)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

impl Track {
    #[must_use]
    pub fn end_time(&self) -> f32 {
        match &self.data {
            TrackData::Vector3(track) => track.end_time(),
            TrackData::Quaternion(track) => track.end_time(),
        }
    }

    /// Number of keyframes in the track's data.
    #[must_use]
    pub fn key_count(&self) -> usize {
        match &self.data {
            TrackData::Vector3(track) => track.times.len(),
            TrackData::Quaternion(track) => track.times.len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub uuid: Uuid,
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Builds a clip; duration is the latest end time across all tracks.
    #[must_use]
    pub fn new(name: String, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(Track::end_time)
            .fold(0.0_f32, f32::max);

        Self {
            uuid: Uuid::new_v4(),
            name,
            duration,
            tracks,
        }
    }
}
