mod dispatch;
mod helpers;
mod rendering;
mod segmentation;
