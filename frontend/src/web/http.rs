//! HTTP 传输模块
//!
//! 基于 `web_sys::fetch` 实现核心库的 `HttpClient`。
//! multipart 请求体转换为 `FormData`，由浏览器生成 boundary。

use babu_erectors::{ApiError, ApiResult, HttpClient, HttpRequest, HttpResponse, MultipartForm, RequestBody};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Headers, Request, RequestInit, Response};

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// 浏览器 fetch 客户端
#[derive(Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn form_data(form: MultipartForm) -> Result<FormData, JsValue> {
        let data = FormData::new()?;
        for (name, value) in &form.fields {
            data.append_with_str(name, value)?;
        }
        for (name, file) in &form.files {
            let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
            let parts = js_sys::Array::of1(&bytes);
            let bag = BlobPropertyBag::new();
            bag.set_type(&file.content_type);
            let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &bag)?;
            data.append_with_blob_and_filename(name, &blob, &file.file_name)?;
        }
        Ok(data)
    }

    fn build(req: HttpRequest) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        for (key, value) in &req.headers {
            headers.set(key, value)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        match req.body {
            Some(RequestBody::Json(body)) => opts.set_body(&JsValue::from_str(&body)),
            Some(RequestBody::Multipart(form)) => opts.set_body(&Self::form_data(form)?.into()),
            None => {}
        }

        Request::new_with_str_and_init(&req.url, &opts)
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let request = Self::build(req)
            .map_err(|e| ApiError::connectivity(format!("failed to build request: {}", js_err(e))))?;

        let window = web_sys::window().ok_or_else(|| ApiError::connectivity("no window"))?;

        // fetch 只在网络层失败时 reject，HTTP 错误状态照常 resolve
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::connectivity(js_err(e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|e| ApiError::connectivity(js_err(e)))?;

        let status = response.status();
        // 按字节读取，JSON 与二进制响应一视同仁
        let buffer = response
            .array_buffer()
            .map_err(|e| ApiError::connectivity(js_err(e)))?;
        let buffer = JsFuture::from(buffer)
            .await
            .map_err(|e| ApiError::connectivity(js_err(e)))?;
        let body = js_sys::Uint8Array::new(&buffer).to_vec();

        Ok(HttpResponse::new(status, body))
    }
}
