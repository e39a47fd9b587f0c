//! 화면 비율 검사.
//!
//! 프레임 크기를 긴 변/짧은 변 비율로 정규화해 16:9와 비교한다.
//! 가로/세로 방향은 구분하지 않는다 (1920x1080 == 1080x1920).

/// 목표 비율 너비 항
pub const TARGET_WIDTH: i64 = 16;
/// 목표 비율 높이 항
pub const TARGET_HEIGHT: i64 = 9;
/// 목표 비율 (16:9)
pub const TARGET_RATIO: f64 = TARGET_WIDTH as f64 / TARGET_HEIGHT as f64;
/// 허용 오차 (퍼센트). `is_match`의 정수 비교가 이 값을 쓴다
pub const TOLERANCE_PERCENT: i64 = 2;
/// 허용 오차 (목표 비율 대비 ±2%, 로그용)
pub const TOLERANCE: f64 = TOLERANCE_PERCENT as f64 / 100.0;

/// 긴 변 / 짧은 변 비율.
///
/// 어느 한 변이라도 0 이하면 `None`.
pub fn normalize(width: i64, height: i64) -> Option<f64> {
    if width <= 0 || height <= 0 {
        return None;
    }
    let (long, short) = orient(width, height);
    Some(long as f64 / short as f64)
}

/// 프레임 크기가 16:9 허용 범위 안인지 검사.
///
/// `|long/short − 16/9| ≤ 16/9 × 0.02` 를 정수 교차 곱셈으로 계산한다.
/// 경계값(정확히 ±2%)은 통과. 0 이하 크기는 항상 불일치.
pub fn is_match(width: i64, height: i64) -> bool {
    if width <= 0 || height <= 0 {
        return false;
    }
    let (long, short) = orient(width, height);
    let (long, short) = (long as i128, short as i128);

    // |long·9 − 16·short| / (9·short) ≤ (16/9)·(2/100)
    //   ⇔ 100·|long·9 − 16·short| ≤ 16·2·short
    let deviation = (long * TARGET_HEIGHT as i128 - TARGET_WIDTH as i128 * short).abs();
    100 * deviation <= TARGET_WIDTH as i128 * TOLERANCE_PERCENT as i128 * short
}

fn orient(width: i64, height: i64) -> (i64, i64) {
    if width > height {
        (width, height)
    } else {
        (height, width)
    }
}
