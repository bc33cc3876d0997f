use crate::core::prelude::*;

/// Maps the part of the world in view onto the window.
///
/// The window is measured in pixels with its left-top corner at the origin; the view is a rect
/// in world space. Initially the view sits at the origin and is exactly as large as the window,
/// so one block covers [`PixelsPerBlock`] pixels.
///
/// ```
/// use dodge::core::prelude::*;
///
/// let camera = Camera::new(PixelDisplacement::new(pl(640.0), pl(320.0)));
/// assert_eq!(camera.view_bound().size(), BaseDisplacement::new(bl(20.0), bl(10.0)));
/// let screen = camera.to_screen_coord(BasePosition::new(bl(1.0), bl(2.0)));
/// assert_eq!(screen, PixelPosition::new(pl(32.0), pl(64.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    window_rect: PixelRect,
    view_rect: BaseRect,
}

impl Camera {
    /// The window must have a positive width and height, since the coordinate mappings divide
    /// by them.
    pub fn new(window_size: PixelDisplacement) -> Self {
        check!(
            window_size.x > pl(0.0) && window_size.y > pl(0.0),
            "window size must be positive: {}",
            window_size
        );
        Self {
            window_rect: PixelRect::left_top_size(PixelPosition::zero(), window_size),
            view_rect: BaseRect::left_top_size(BasePosition::zero(), window_size.convert()),
        }
    }

    pub fn window_bound(&self) -> PixelRect {
        self.window_rect
    }
    pub fn view_bound(&self) -> BaseRect {
        self.view_rect
    }

    /// True if any part of `rect` is strictly inside the view.
    pub fn is_visible(&self, rect: BaseRect) -> bool {
        has_collision(&self.view_rect, &rect)
    }

    pub fn to_screen_coord(&self, world_coord: BasePosition) -> PixelPosition {
        let view_coord = world_coord - self.view_rect.left_top();
        let rel_coord = elem_div(view_coord, self.view_rect.size());
        let screen_coord: PixelDisplacement = elem_mul(rel_coord, self.window_rect.size());
        screen_coord + self.window_rect.left_top()
    }

    pub fn to_world_coord(&self, screen_coord: PixelPosition) -> BasePosition {
        let rel_coord = elem_div(
            screen_coord - self.window_rect.left_top(),
            self.window_rect.size(),
        );
        let view_coord: BaseDisplacement = elem_mul(rel_coord, self.view_rect.size());
        view_coord + self.view_rect.left_top()
    }

    pub fn centre_on(&mut self, centre: BasePosition) {
        self.view_rect.move_centre(centre);
    }

    /// Factors above 1 zoom in (less of the world in view), below 1 zoom out. The view keeps
    /// its centre.
    pub fn zoom(&mut self, factor: Scalar) {
        crate::debug_check!(factor > 0.0, "zoom factor must be positive: {}", factor);
        self.view_rect.scale_this(1.0 / factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(PixelDisplacement::new(pl(640.0), pl(320.0)))
    }
    fn pos(x: Scalar, y: Scalar) -> BasePosition {
        BasePosition::new(bl(x), bl(y))
    }

    #[test]
    fn bounds_start_at_origin() {
        let camera = camera();
        assert_eq!(camera.window_bound().left_top(), PixelPosition::zero());
        assert_eq!(camera.window_bound().right_bottom(), PixelPosition::new(pl(640.0), pl(320.0)));
        assert_eq!(camera.view_bound().left_top(), BasePosition::zero());
        assert_eq!(camera.view_bound().right_bottom(), pos(20.0, 10.0));
    }

    #[test]
    fn screen_and_world_coords_are_inverse() {
        let mut camera = camera();
        for world in [pos(0.0, 0.0), pos(2.5, 2.5), pos(20.0, 10.0), pos(-5.0, 12.5)] {
            check_nearly_eq!(camera.to_world_coord(camera.to_screen_coord(world)), world);
        }
        camera.centre_on(pos(100.0, -40.0));
        camera.zoom(2.0);
        for world in [pos(100.0, -40.0), pos(97.5, -41.25), pos(96.25, -39.375)] {
            check_nearly_eq!(camera.to_world_coord(camera.to_screen_coord(world)), world);
        }
    }

    #[test]
    fn centre_on_moves_view() {
        let mut camera = camera();
        camera.centre_on(pos(0.0, 0.0));
        assert_eq!(camera.view_bound().left_top(), pos(-10.0, -5.0));
        assert_eq!(
            camera.to_screen_coord(pos(0.0, 0.0)),
            PixelPosition::new(pl(320.0), pl(160.0))
        );
        assert_eq!(camera.window_bound(), Camera::new(camera.window_bound().size()).window_bound());
    }

    #[test]
    fn zoom_scales_view_about_centre() {
        let mut camera = camera();
        camera.zoom(2.0);
        assert_eq!(camera.view_bound().centre(), pos(10.0, 5.0));
        assert_eq!(camera.view_bound().size(), BaseDisplacement::new(bl(10.0), bl(5.0)));
        // One block now covers twice as many pixels.
        let a = camera.to_screen_coord(pos(10.0, 5.0));
        let b = camera.to_screen_coord(pos(12.5, 5.0));
        assert_eq!((b - a).x, pl(160.0));
        camera.zoom(0.5);
        assert_eq!(camera.view_bound(), Camera::new(camera.window_bound().size()).view_bound());
    }

    #[test]
    fn visibility_is_strict() {
        let camera = camera();
        let size = BaseDisplacement::new(bl(2.0), bl(2.0));
        assert!(camera.is_visible(BaseRect::left_top_size(pos(5.0, 5.0), size)));
        assert!(camera.is_visible(BaseRect::left_top_size(pos(-1.0, -1.0), size)));
        assert!(!camera.is_visible(BaseRect::left_top_size(pos(-2.0, 0.0), size)));
        assert!(!camera.is_visible(BaseRect::left_top_size(pos(20.0, 0.0), size)));
        assert!(!camera.is_visible(BaseRect::left_top_size(pos(30.0, 30.0), size)));
    }

    #[test]
    #[should_panic(expected = "window size must be positive")]
    fn negative_window_size_panics() {
        let _ = Camera::new(PixelDisplacement::new(pl(-1.0), pl(10.0)));
    }

    #[test]
    #[should_panic(expected = "window size must be positive")]
    fn empty_window_panics() {
        let _ = Camera::new(PixelDisplacement::new(pl(640.0), pl(0.0)));
    }
}
