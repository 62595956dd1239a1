use crate::{
    bird_glyph, rect_outline, void_layers, Bird, Color, Config, FrameStats, Params, Rect, SketchKind,
    StrokePath, Time, View,
};
use hecs::World;

const WORLD_OUTLINE: Color = Color::rgba(255, 255, 255, 60);

/// Everything to stroke this frame, in physical viewport coordinates, back
/// to front
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub paths: Vec<StrokePath>,
    pub stats: FrameStats,
}

/// Build the draw list: the void across the viewport, the world border when
/// the camera can move, then every bird the camera can see.
pub fn compose_frame(
    world: &World,
    view: &View,
    time: &Time,
    kind: SketchKind,
    config: &Config,
) -> Frame {
    let phy = view.phy();
    let mut paths = void_layers(phy.width(), phy.height(), time.now);

    if kind.pans() {
        let border = Rect::new(
            view.world_to_phy(view.world().min),
            view.world_to_phy(view.world().max),
        );
        paths.push(rect_outline(&border, WORLD_OUTLINE, Params::OUTLINE_WIDTH));
    }

    let cull = kind.culls() && config.cull;
    let margin = config.cull_margin();
    let mut stats = FrameStats::new();

    for (_entity, bird) in world.query::<&Bird>().iter() {
        if cull && !view.is_in_view(bird.pos, margin) {
            stats.culled_birds += 1;
            continue;
        }
        stats.visible_birds += 1;
        paths.extend(bird_glyph(
            view.world_to_phy(bird.pos),
            bird.heading,
            config.bird_skew,
            config.bird_size,
        ));
    }

    Frame { paths, stats }
}
