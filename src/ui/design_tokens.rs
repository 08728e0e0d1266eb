// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the inspector pages and the snackbar.

## Organization

- **Palette**: Grays, the blue accent scale and one color per snackbar severity
- **Opacity**: Alpha levels for surfaces, hover states and removed rows
- **Spacing**: 4px-based spacing scale
- **Sizing**: Fixed widths (sidebar, snackbar, device table columns)
- **Typography**: Font sizes from page header to caption
- **Border**, **Radius**, **Shadow**: Card and button outlines

## Examples

```
use bt_lens::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Dimmed text for a device that left the adapter
let removed = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::GRAY_700
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Accent (selected page, primary action)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Snackbar severities; ERROR_500 also marks destructive buttons
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Snackbar and sidebar background
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const SIDEBAR_WIDTH: f32 = 220.0;
    pub const SNACKBAR_WIDTH: f32 = 420.0;
    pub const FORMAT_PICKER_WIDTH: f32 = 140.0;

    // Device table columns; the name column takes the remaining width
    pub const ADDRESS_COLUMN: f32 = 170.0;
    pub const RSSI_COLUMN: f32 = 70.0;
    pub const SERVICES_COLUMN: f32 = 80.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page header
    pub const TITLE_MD: f32 = 20.0;

    /// Service headings on the details page
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY: f32 = 14.0;

    /// Field labels, table headers, button captions
    pub const BODY_SM: f32 = 13.0;

    /// Characteristic properties and permissions
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders, Radii and Shadows
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Snackbar severity accent
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::SURFACE < opacity::OPAQUE);

    // The snackbar must not be hidden behind an open sidebar
    assert!(sizing::SNACKBAR_WIDTH > sizing::SIDEBAR_WIDTH);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
